use planar_types::{MultiPolygon, PlanarPoint, Polygon, Rect, Ring};

/// Winding-parity point location.
///
/// `point_index` returns `+1` when the query point is strictly inside the
/// region, `0` when it lies on the boundary and `-1` when it is strictly
/// outside. Non-finite query coordinates are treated as strictly outside —
/// NaN never propagates out of the test.
///
/// The scan casts the ray `y = py, x ≥ px` through the oriented edges of the
/// region; the half-open `(ay, by]` crossing interval is the tie-break that
/// keeps shared ring vertices from being counted twice.
pub trait PointIndex<P: PlanarPoint> {
    fn point_index(&self, point: &P) -> i32;
}

/// Folds one oriented edge `a → b` into the accumulated index.
///
/// A zero index is sticky: once a point is known to sit on the boundary no
/// further edge can change that.
pub(crate) fn update_point_index<P: PlanarPoint>(point: &P, a: &P, b: &P, index: i32) -> i32 {
    if index == 0 {
        return 0;
    }

    let px = point.x();
    let py = point.y();
    let (mut ax, mut ay) = (a.x(), a.y());
    let (mut bx, mut by) = (b.x(), b.y());

    if ay > by {
        std::mem::swap(&mut ax, &mut bx);
        std::mem::swap(&mut ay, &mut by);
    }

    if ay == by && ay == py {
        // Horizontal edge on the ray line: on-boundary if px is within it.
        if (ax <= px && px <= bx) || (bx <= px && px <= ax) {
            return 0;
        }
        return index;
    }

    if ay >= py || by < py {
        return index;
    }

    let lhs = (ax - px) * (by - ay);
    let rhs = (ay - py) * (bx - ax);

    if lhs == rhs {
        return 0;
    }

    if lhs < rhs {
        index
    } else {
        -index
    }
}

pub(crate) fn point_index_over_edges<P, I>(point: &P, edges: I) -> i32
where
    P: PlanarPoint,
    I: IntoIterator<Item = (P, P)>,
{
    let mut index = -1;
    for (a, b) in edges {
        index = update_point_index(point, &a, &b, index);
        if index == 0 {
            break;
        }
    }
    index
}

impl<P: PlanarPoint> PointIndex<P> for Rect<P> {
    fn point_index(&self, point: &P) -> i32 {
        if !point.is_finite() {
            return -1;
        }
        let (px, py) = (point.x(), point.y());
        if px < self.min.x() || px > self.max.x() || py < self.min.y() || py > self.max.y() {
            return -1;
        }
        if px > self.min.x() && px < self.max.x() && py > self.min.y() && py < self.max.y() {
            return 1;
        }
        0
    }
}

impl<P: PlanarPoint> PointIndex<P> for Ring<P> {
    fn point_index(&self, point: &P) -> i32 {
        if !point.is_finite() {
            return -1;
        }
        point_index_over_edges(point, self.0.windows(2).map(|pair| (pair[0], pair[1])))
    }
}

impl<P: PlanarPoint> PointIndex<P> for Polygon<P> {
    fn point_index(&self, point: &P) -> i32 {
        if !point.is_finite() {
            return -1;
        }

        let index = self.exterior.point_index(point);
        if index <= 0 {
            return index;
        }

        // Inside the exterior: a hole turns the verdict inside out. On a hole
        // boundary the point is on the polygon boundary.
        for inner in &self.interiors {
            let index = inner.point_index(point);
            if index >= 0 {
                return -index;
            }
        }

        1
    }
}

impl<P: PlanarPoint> PointIndex<P> for MultiPolygon<P> {
    fn point_index(&self, point: &P) -> i32 {
        if !point.is_finite() {
            return -1;
        }

        for part in &self.0 {
            let index = part.point_index(point);
            if index >= 0 {
                return index;
            }
        }

        -1
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_types::{ring, xy, MultiPolygon, Polygon};

    // The hole-bearing fixture from the reference suite: a C-shaped outer
    // with a square hole over the notch.
    fn holed() -> MultiPolygon<planar_types::XyPoint> {
        MultiPolygon(vec![Polygon::new(
            ring![
                (1.0, 0.0),
                (3.0, 0.0),
                (3.0, 3.0),
                (0.0, 3.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (1.0, 0.0)
            ],
            vec![ring![
                (1.0, 1.0),
                (1.0, 2.0),
                (2.0, 2.0),
                (2.0, 1.0),
                (1.0, 1.0)
            ]],
        )])
    }

    #[test]
    fn outside_points() {
        let geom = holed();
        assert_eq!(geom.point_index(&xy!(0.0, 0.0)), -1);
        assert_eq!(geom.point_index(&xy!(-1.0, 1.0)), -1);
    }

    #[test]
    fn point_in_hole_is_outside() {
        assert_eq!(holed().point_index(&xy!(1.5, 1.5)), -1);
    }

    #[test]
    fn boundary_points() {
        let geom = holed();
        assert_eq!(geom.point_index(&xy!(0.5, 1.0)), 0);
        assert_eq!(geom.point_index(&xy!(1.0, 1.0)), 0);
        assert_eq!(geom.point_index(&xy!(1.5, 1.0)), 0);
    }

    #[test]
    fn interior_points() {
        let geom = holed();
        assert_eq!(geom.point_index(&xy!(2.5, 1.5)), 1);
        assert_eq!(geom.point_index(&xy!(0.5, 2.0)), 1);
    }

    #[test]
    fn non_finite_query_is_outside() {
        let geom = holed();
        assert_eq!(geom.point_index(&xy!(f64::NAN, 1.0)), -1);
        assert_eq!(geom.point_index(&xy!(1.0, f64::INFINITY)), -1);
    }

    #[test]
    fn rect_boundary_and_interior() {
        let rect = planar_types::Rect::new(xy!(0.0, 0.0), xy!(4.0, 2.0));
        assert_eq!(rect.point_index(&xy!(2.0, 1.0)), 1);
        assert_eq!(rect.point_index(&xy!(0.0, 1.0)), 0);
        assert_eq!(rect.point_index(&xy!(4.0, 2.0)), 0);
        assert_eq!(rect.point_index(&xy!(4.1, 1.0)), -1);
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // Query level with the apex vertex: the (ay, by] interval must not
        // double-count the two edges meeting there.
        let diamond = ring![(0.0, -2.0), (2.0, 0.0), (0.0, 2.0), (-2.0, 0.0), (0.0, -2.0)];
        assert_eq!(diamond.point_index(&xy!(-0.5, 0.0)), 1);
        assert_eq!(diamond.point_index(&xy!(-3.0, 0.0)), -1);
    }
}
