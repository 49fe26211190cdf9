use planar_types::{LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment};

use crate::algorithm::edges_iter::EdgesIter;
use crate::algorithm::point_index::PointIndex;
use crate::algorithm::segment_intersection::{segment_intersection, SegmentIntersection};

/// Containment of points, segments and polylines in a closed region.
///
/// Boundary counts as contained. A segment is contained when both endpoints
/// are inside-or-boundary, no boundary edge crosses it properly, and the
/// midpoint of every sub-segment between consecutive boundary touches is
/// inside-or-boundary. A polyline is contained when each of its segments is.
pub trait Contains<Rhs> {
    fn contains(&self, rhs: &Rhs) -> bool;
}

fn contains_segment<P, R>(region: &R, first: &P, second: &P) -> bool
where
    P: PlanarPoint,
    R: PointIndex<P> + EdgesIter<P>,
{
    if region.point_index(first) < 0 || region.point_index(second) < 0 {
        return false;
    }

    let mut cross_points: Vec<(f64, P)> = Vec::new();

    for edge in region.edges(false) {
        let result = segment_intersection(first, second, &edge.first, &edge.second);
        if let SegmentIntersection::One(c) = &result {
            if 0.0 < c.u && c.u < 1.0 && 0.0 < c.v && c.v < 1.0 {
                // A proper crossing: the segment leaves the region.
                return false;
            }
        }
        for c in result.iter() {
            if 0.0 < c.u && c.u < 1.0 {
                cross_points.push((c.u, c.point));
            }
        }
    }

    if cross_points.is_empty() {
        return true;
    }

    // Walk the sub-segments between consecutive boundary touches and require
    // each midpoint to stay inside-or-boundary.
    cross_points.push((1.0, *second));
    cross_points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    cross_points.dedup_by(|a, b| a.0 == b.0);

    let mut src = *first;
    for (_, point) in cross_points {
        if region.point_index(&src.midpoint(&point)) < 0 {
            return false;
        }
        src = point;
    }

    true
}

macro_rules! impl_contains {
    ($region:ident) => {
        impl<P: PlanarPoint> Contains<P> for $region<P> {
            fn contains(&self, point: &P) -> bool {
                self.point_index(point) >= 0
            }
        }

        impl<P: PlanarPoint> Contains<Segment<P>> for $region<P> {
            fn contains(&self, segment: &Segment<P>) -> bool {
                contains_segment(self, &segment.first, &segment.second)
            }
        }

        impl<P: PlanarPoint> Contains<LineString<P>> for $region<P> {
            fn contains(&self, line: &LineString<P>) -> bool {
                line.0
                    .windows(2)
                    .all(|pair| contains_segment(self, &pair[0], &pair[1]))
            }
        }
    };
}

impl_contains!(Rect);
impl_contains!(Ring);
impl_contains!(Polygon);
impl_contains!(MultiPolygon);
