use std::collections::{BTreeMap, BTreeSet, HashMap};

use planar_types::{PlanarPoint, PointKey};

use crate::algorithm::point_index::update_point_index;
use crate::algorithm::segment_intersection::segment_intersection;

pub(crate) type VertexId = u32;
pub(crate) type Color = u8;

/// Color of a vertex after the correction pass: the single color of every
/// incident edge, or `Mixed` where edges of both operands meet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum VertexColor {
    Single(Color),
    Mixed,
}

/// A directed overlay edge. The derived order is color-major, then source,
/// then destination — the iteration order every downstream step (pair
/// crossing, classification, ring harvest) depends on for determinism.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub(crate) struct GraphEdge {
    pub color: Color,
    pub src: VertexId,
    pub dst: VertexId,
}

#[derive(Debug)]
struct Vertex<P> {
    point: P,
    color: Option<VertexColor>,
}

/// The dual-color planar overlay graph backing one Boolean operation.
///
/// Vertices are deduplicated through a map keyed on the exact snapped
/// coordinates and addressed by monotonically assigned integer ids; edges
/// reference vertices by id only.
#[derive(Debug)]
pub(crate) struct OverlayGraph<P: PlanarPoint> {
    vertices: BTreeMap<VertexId, Vertex<P>>,
    point_map: HashMap<PointKey, VertexId>,
    edges: BTreeSet<GraphEdge>,
    next_id: VertexId,
}

impl<P: PlanarPoint> OverlayGraph<P> {
    pub fn new() -> Self {
        OverlayGraph {
            vertices: BTreeMap::new(),
            point_map: HashMap::new(),
            edges: BTreeSet::new(),
            next_id: 0,
        }
    }

    /// Snaps the point and returns the id of its grid vertex, allocating one
    /// on first sight.
    pub fn add_vertex(&mut self, point: P) -> VertexId {
        let point = point.snap();
        let key = point.key();
        if let Some(&id) = self.point_map.get(&key) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.vertices.insert(id, Vertex { point, color: None });
        self.point_map.insert(key, id);
        id
    }

    pub fn point(&self, id: VertexId) -> P {
        self.vertices[&id].point
    }

    pub fn vertex_color(&self, id: VertexId) -> Option<VertexColor> {
        self.vertices[&id].color
    }

    pub fn add_edge(&mut self, color: Color, src: VertexId, dst: VertexId) {
        if src == dst {
            return;
        }
        let inserted = self.edges.insert(GraphEdge { color, src, dst });
        debug_assert!(inserted, "multi-edge ({color}, {src} -> {dst})");
    }

    pub fn remove_edge(&mut self, edge: &GraphEdge) {
        self.edges.remove(edge);
    }

    pub fn has_edge(&self, color: Color, src: VertexId, dst: VertexId) -> bool {
        self.edges.contains(&GraphEdge { color, src, dst })
    }

    /// The globally smallest surviving edge in color-major order.
    pub fn first_edge(&self) -> Option<GraphEdge> {
        self.edges.iter().next().copied()
    }

    /// The smallest outgoing edge of `src`, scanning color 0 before color 1.
    pub fn first_edge_from(&self, src: VertexId) -> Option<GraphEdge> {
        for color in 0..2 {
            let lower = GraphEdge {
                color,
                src,
                dst: 0,
            };
            if let Some(&edge) = self
                .edges
                .range(lower..)
                .next()
                .filter(|e| e.color == color && e.src == src)
            {
                return Some(edge);
            }
        }
        None
    }

    pub fn edges_of_color(&self, color: Color) -> impl Iterator<Item = &GraphEdge> {
        let lower = GraphEdge {
            color,
            src: 0,
            dst: 0,
        };
        self.edges
            .range(lower..)
            .take_while(move |e| e.color == color)
    }

    /// Crosses every color-0 edge with every color-1 edge and splits both
    /// sides at interior contacts, routing the replacement chains through the
    /// point map. Endpoint contacts need no split — snapping has already made
    /// them exact vertices.
    pub fn split_crossings(&mut self) {
        let color0: Vec<GraphEdge> = self.edges_of_color(0).copied().collect();
        let color1: Vec<GraphEdge> = self.edges_of_color(1).copied().collect();

        let mut cross_points: BTreeMap<GraphEdge, Vec<(f64, P)>> = BTreeMap::new();

        for e0 in &color0 {
            for e1 in &color1 {
                let result = segment_intersection(
                    &self.point(e0.src),
                    &self.point(e0.dst),
                    &self.point(e1.src),
                    &self.point(e1.dst),
                );

                for contact in result.iter() {
                    log::trace!(
                        "cross: {}->{} and {}->{}, u={}, v={}, i=({}, {})",
                        e0.src,
                        e0.dst,
                        e1.src,
                        e1.dst,
                        contact.u,
                        contact.v,
                        contact.point.x(),
                        contact.point.y()
                    );
                    if 0.0 < contact.u && contact.u < 1.0 {
                        cross_points.entry(*e0).or_default().push((contact.u, contact.point));
                    }
                    if 0.0 < contact.v && contact.v < 1.0 {
                        cross_points.entry(*e1).or_default().push((contact.v, contact.point));
                    }
                }
            }
        }

        for (edge, mut splits) in cross_points {
            splits.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

            log::trace!(
                "splitting edge [color={}, src={}, dst={}] at {} contacts",
                edge.color,
                edge.src,
                edge.dst,
                splits.len()
            );

            self.remove_edge(&edge);
            let mut src = edge.src;
            for (_, point) in splits {
                let dst = self.add_vertex(point);
                self.add_edge(edge.color, src, dst);
                src = dst;
            }
            self.add_edge(edge.color, src, edge.dst);
        }

        self.assign_vertex_colors();
    }

    fn assign_vertex_colors(&mut self) {
        let edges: Vec<GraphEdge> = self.edges.iter().copied().collect();
        for edge in edges {
            for id in [edge.src, edge.dst] {
                if let Some(vertex) = self.vertices.get_mut(&id) {
                    vertex.color = match vertex.color {
                        None => Some(VertexColor::Single(edge.color)),
                        Some(VertexColor::Single(c)) if c == edge.color => vertex.color,
                        _ => Some(VertexColor::Mixed),
                    };
                }
            }
        }
    }

    /// Winding parity of `point` against the directed edge set of one color.
    pub fn point_index(&self, color: Color, point: &P) -> i32 {
        let mut index = -1;
        for edge in self.edges_of_color(color) {
            index = update_point_index(point, &self.point(edge.src), &self.point(edge.dst), index);
            if index == 0 {
                break;
            }
        }
        index
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_types::{xy, XyPoint};

    fn square(graph: &mut OverlayGraph<XyPoint>, color: Color, origin: XyPoint, size: f64) {
        let points = [
            origin,
            xy!(origin.x + size, origin.y),
            xy!(origin.x + size, origin.y + size),
            xy!(origin.x, origin.y + size),
            origin,
        ];
        for pair in points.windows(2) {
            let src = graph.add_vertex(pair[0]);
            let dst = graph.add_vertex(pair[1]);
            graph.add_edge(color, src, dst);
        }
    }

    #[test]
    fn vertices_deduplicate_on_the_snap_grid() {
        let mut graph: OverlayGraph<XyPoint> = OverlayGraph::new();
        let a = graph.add_vertex(xy!(1.0, 2.0));
        let b = graph.add_vertex(xy!(1.0 + 0.3e-12, 2.0));
        assert_eq!(a, b);
    }

    #[test]
    fn crossing_squares_split_both_edges() {
        let mut graph: OverlayGraph<XyPoint> = OverlayGraph::new();
        square(&mut graph, 0, xy!(0.0, 0.0), 2.0);
        square(&mut graph, 1, xy!(1.0, 1.0), 2.0);
        let before = graph.edges_of_color(0).count() + graph.edges_of_color(1).count();
        assert_eq!(before, 8);

        graph.split_crossings();

        // Two proper crossings, each splitting one edge per color.
        assert_eq!(graph.edges_of_color(0).count(), 6);
        assert_eq!(graph.edges_of_color(1).count(), 6);

        let crossing = graph.add_vertex(xy!(2.0, 1.0));
        assert_eq!(graph.vertex_color(crossing), Some(VertexColor::Mixed));
        let own = graph.add_vertex(xy!(0.0, 0.0));
        assert_eq!(graph.vertex_color(own), Some(VertexColor::Single(0)));
    }

    #[test]
    fn per_color_winding() {
        let mut graph: OverlayGraph<XyPoint> = OverlayGraph::new();
        square(&mut graph, 0, xy!(0.0, 0.0), 2.0);
        square(&mut graph, 1, xy!(10.0, 10.0), 2.0);

        assert_eq!(graph.point_index(0, &xy!(1.0, 1.0)), 1);
        assert_eq!(graph.point_index(1, &xy!(1.0, 1.0)), -1);
        assert_eq!(graph.point_index(0, &xy!(0.0, 1.0)), 0);
    }

    #[test]
    fn successor_prefers_color_zero() {
        let mut graph: OverlayGraph<XyPoint> = OverlayGraph::new();
        let a = graph.add_vertex(xy!(0.0, 0.0));
        let b = graph.add_vertex(xy!(1.0, 0.0));
        let c = graph.add_vertex(xy!(0.0, 1.0));
        graph.add_edge(1, a, c);
        graph.add_edge(0, a, b);

        let next = graph.first_edge_from(a).unwrap();
        assert_eq!(next.color, 0);
        assert_eq!(next.dst, b);
    }
}
