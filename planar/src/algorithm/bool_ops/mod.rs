//! Boolean operations over polygonal regions via a dual-color planar
//! overlay graph.
//!
//! Both operands are ingested as directed boundary edges tagged with their
//! operand color, mutually split at crossings, classified against the other
//! operand's region, filtered by the operation's keep-policy and finally
//! walked back into rings. Operands are expected to be `correct`ed (closed,
//! consistently wound, simple); the overlay splits crossings *between* the
//! operands but never within one.

mod graph;

use std::collections::HashSet;
use std::fmt;

use planar_types::{MultiPolygon, PlanarPoint, Polygon, Ring};

use self::graph::{Color, GraphEdge, OverlayGraph, VertexColor, VertexId};
use crate::algorithm::area::Area;
use crate::algorithm::correct::Correct;
use crate::algorithm::edges_iter::EdgesIter;
use crate::algorithm::point_index::PointIndex;

/// The supported Boolean operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OpType {
    Union,
    Intersection,
    Difference,
}

/// Geometric failure raised by the overlay. See the crate-level error notes:
/// these indicate operands that violate the simplicity assumptions, not
/// numeric trouble.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OverlayError {
    /// An edge walk ran out of successors before closing a cycle.
    IncompleteRing,
    /// An interior ring's sample point landed exactly on an exterior ring
    /// while pairing rings into polygons.
    RingAssignment,
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::IncompleteRing => {
                write!(f, "incomplete ring in overlay; check input geometries")
            }
            OverlayError::RingAssignment => {
                write!(
                    f,
                    "inner-outer ring overlap while assembling polygons; check input geometries"
                )
            }
        }
    }
}

impl std::error::Error for OverlayError {}

/// Classification of an overlay edge relative to the other operand's region.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum EdgeClass {
    /// Coincident with an opposite-direction edge of the other color, or on
    /// the other region's boundary.
    None,
    /// Strictly inside the other region.
    Inner,
    /// Strictly outside the other region.
    Outer,
    /// Coincident with a same-direction edge of the other color.
    Border,
}

fn classify_edge<P: PlanarPoint>(
    graph: &OverlayGraph<P>,
    edge: &GraphEdge,
    other: Color,
) -> EdgeClass {
    debug_assert_ne!(edge.color, other);

    if graph.has_edge(other, edge.src, edge.dst) {
        return EdgeClass::Border;
    }

    if graph.has_edge(other, edge.dst, edge.src) {
        return EdgeClass::None;
    }

    let midpoint = graph.point(edge.src).midpoint(&graph.point(edge.dst));
    match graph.point_index(other, &midpoint) {
        0 => EdgeClass::None,
        index if index > 0 => EdgeClass::Inner,
        _ => EdgeClass::Outer,
    }
}

// Which edges survive into ring harvesting. BORDER edges are kept for
// color 0 only, so a shared boundary contributes exactly once.
fn keep_edge(class: EdgeClass, color: Color, op: OpType) -> bool {
    match op {
        OpType::Union => class == EdgeClass::Outer || (class == EdgeClass::Border && color == 0),
        OpType::Intersection => {
            class == EdgeClass::Inner || (class == EdgeClass::Border && color == 0)
        }
        OpType::Difference => {
            (class == EdgeClass::Outer && color == 0)
                || (class == EdgeClass::Inner && color > 0)
                || (class == EdgeClass::Border && color == 0)
        }
    }
}

/// Pairs harvested rings into polygons: CCW rings become exteriors, CW rings
/// are assigned to the first exterior (in ascending-area order) that strictly
/// contains the midpoint of their first edge.
fn assemble_rings<P: PlanarPoint>(
    mut rings: Vec<Ring<P>>,
) -> Result<MultiPolygon<P>, OverlayError> {
    if rings.is_empty() {
        return Ok(MultiPolygon::default());
    }

    let mut outers: Vec<(usize, f64)> = Vec::new();
    let mut inners: Vec<(usize, f64)> = Vec::new();

    for (i, ring) in rings.iter().enumerate() {
        let area = ring.area();
        if area > 0.0 {
            outers.push((i, area));
        } else {
            inners.push((i, -area));
        }
    }

    outers.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    inners.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    if outers.is_empty() {
        log::warn!(
            "overlay produced {} rings but no outer ring; returning an empty result",
            rings.len()
        );
        return Ok(MultiPolygon::default());
    }

    let mut result: MultiPolygon<P> = outers
        .iter()
        .map(|&(i, _)| Polygon::from(std::mem::take(&mut rings[i])))
        .collect();

    for &(i, _) in &inners {
        let inner = std::mem::take(&mut rings[i]);
        let sample = inner.0[0].midpoint(&inner.0[1]);
        for part in &mut result.0 {
            let index = part.exterior.point_index(&sample);
            if index == 0 {
                return Err(OverlayError::RingAssignment);
            }
            if index > 0 {
                part.interiors.push(inner);
                break;
            }
        }
    }

    result.correct();

    Ok(result)
}

pub(crate) fn binary_operation<P, A, B>(
    op: OpType,
    geometry1: &A,
    geometry2: &B,
) -> Result<MultiPolygon<P>, OverlayError>
where
    P: PlanarPoint,
    A: EdgesIter<P>,
    B: EdgesIter<P>,
{
    let mut graph: OverlayGraph<P> = OverlayGraph::new();

    for edge in geometry1.edges(false) {
        let src = graph.add_vertex(edge.first);
        let dst = graph.add_vertex(edge.second);
        graph.add_edge(0, src, dst);
    }

    // For a difference the subtrahend's boundary runs backwards, turning its
    // interior into exterior under the same inside-left convention.
    for edge in geometry2.edges(op == OpType::Difference) {
        let src = graph.add_vertex(edge.first);
        let dst = graph.add_vertex(edge.second);
        graph.add_edge(1, src, dst);
    }

    graph.split_crossings();

    let mut removed: Vec<GraphEdge> = Vec::new();
    for color in 0..2 {
        let other = 1 - color;
        let mut prev: Option<(GraphEdge, EdgeClass)> = None;
        for &edge in graph.edges_of_color(color) {
            // A chain continuing through a single-color vertex keeps its
            // classification; only mixed vertices can change it.
            let class = match prev {
                Some((prev_edge, prev_class))
                    if prev_edge.dst == edge.src
                        && graph.vertex_color(edge.src) == Some(VertexColor::Single(color)) =>
                {
                    prev_class
                }
                _ => classify_edge(&graph, &edge, other),
            };
            if !keep_edge(class, color, op) {
                log::trace!(
                    "filtering out edge [color={}, src={}, dst={}] ({class:?})",
                    edge.color,
                    edge.src,
                    edge.dst
                );
                removed.push(edge);
            }
            prev = Some((edge, class));
        }
    }
    for edge in &removed {
        graph.remove_edge(edge);
    }

    let mut rings: Vec<Ring<P>> = Vec::new();

    while let Some(start) = graph.first_edge() {
        let mut path: Vec<VertexId> = vec![start.src];
        let mut visited: HashSet<VertexId> = HashSet::new();
        visited.insert(start.src);

        let mut current = Some(start);
        while let Some(edge) = current {
            let dst = edge.dst;
            path.push(dst);

            if !visited.insert(dst) {
                // Close off the cycle from the first occurrence of dst and
                // keep walking with whatever precedes it.
                let first = path
                    .iter()
                    .position(|&id| id == dst)
                    .expect("revisited vertex is on the path");
                rings.push(path[first..].iter().map(|&id| graph.point(id)).collect());

                path.truncate(first + 1);
                visited.clear();
                visited.extend(path.iter().copied());
            }

            graph.remove_edge(&edge);
            current = graph.first_edge_from(dst);
        }

        if path.len() >= 2 {
            return Err(OverlayError::IncompleteRing);
        }
    }

    assemble_rings(rings)
}

/// Boolean set operations between polygonal regions.
///
/// Each operation returns a corrected multi-polygon; an empty multi-polygon
/// denotes the empty set. Operands must themselves be corrected and simple —
/// pre-correct geometries read from external data.
pub trait BooleanOps<P: PlanarPoint, Rhs = Self> {
    fn boolean_op(&self, other: &Rhs, op: OpType) -> Result<MultiPolygon<P>, OverlayError>;

    fn union(&self, other: &Rhs) -> Result<MultiPolygon<P>, OverlayError> {
        self.boolean_op(other, OpType::Union)
    }

    fn intersection(&self, other: &Rhs) -> Result<MultiPolygon<P>, OverlayError> {
        self.boolean_op(other, OpType::Intersection)
    }

    fn difference(&self, other: &Rhs) -> Result<MultiPolygon<P>, OverlayError> {
        self.boolean_op(other, OpType::Difference)
    }
}

impl<P, A, B> BooleanOps<P, B> for A
where
    P: PlanarPoint,
    A: EdgesIter<P>,
    B: EdgesIter<P>,
{
    fn boolean_op(&self, other: &B, op: OpType) -> Result<MultiPolygon<P>, OverlayError> {
        binary_operation(op, self, other)
    }
}
