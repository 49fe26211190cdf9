use planar_types::{LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment};

/// Axis-aligned bounding rectangle.
///
/// Polygons and multi-polygons are bounded by their exterior rings alone —
/// interior rings cannot extend past the exterior. A bound over an empty
/// vertex set comes back inverted (`min = +∞`, `max = −∞`), which any further
/// min/max fold absorbs transparently.
pub trait BoundingRect<P: PlanarPoint> {
    fn bounding_rect(&self) -> Rect<P>;
}

fn bound_points<'a, P, I>(points: I) -> Rect<P>
where
    P: PlanarPoint + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for point in points {
        min_x = min_x.min(point.x());
        min_y = min_y.min(point.y());
        max_x = max_x.max(point.x());
        max_y = max_y.max(point.y());
    }
    Rect {
        min: P::from_xy(min_x, min_y),
        max: P::from_xy(max_x, max_y),
    }
}

impl<P: PlanarPoint> BoundingRect<P> for Segment<P> {
    fn bounding_rect(&self) -> Rect<P> {
        Rect::new(self.first, self.second)
    }
}

impl<P: PlanarPoint> BoundingRect<P> for Rect<P> {
    fn bounding_rect(&self) -> Rect<P> {
        *self
    }
}

impl<P: PlanarPoint> BoundingRect<P> for LineString<P> {
    fn bounding_rect(&self) -> Rect<P> {
        bound_points(&self.0)
    }
}

impl<P: PlanarPoint> BoundingRect<P> for Ring<P> {
    fn bounding_rect(&self) -> Rect<P> {
        bound_points(&self.0)
    }
}

impl<P: PlanarPoint> BoundingRect<P> for Polygon<P> {
    fn bounding_rect(&self) -> Rect<P> {
        bound_points(&self.exterior.0)
    }
}

impl<P: PlanarPoint> BoundingRect<P> for MultiPolygon<P> {
    fn bounding_rect(&self) -> Rect<P> {
        bound_points(self.0.iter().flat_map(|part| &part.exterior.0))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_types::{ring, xy};

    #[test]
    fn polygon_bound_ignores_interiors() {
        let polygon = Polygon::new(
            ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)],
            vec![ring![(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)]],
        );
        let rect = polygon.bounding_rect();
        assert_eq!(rect.min, xy!(0.0, 0.0));
        assert_eq!(rect.max, xy!(4.0, 4.0));
    }

    #[test]
    fn multi_polygon_bound_spans_parts() {
        let multi = MultiPolygon(vec![
            Polygon::from(ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            Polygon::from(ring![(5.0, -2.0), (6.0, -2.0), (6.0, 3.0), (5.0, -2.0)]),
        ]);
        let rect = multi.bounding_rect();
        assert_eq!(rect.min, xy!(0.0, -2.0));
        assert_eq!(rect.max, xy!(6.0, 3.0));
    }

    #[test]
    fn empty_bound_is_inverted() {
        let empty: MultiPolygon<planar_types::XyPoint> = MultiPolygon::default();
        let rect = empty.bounding_rect();
        assert!(rect.min.x() > rect.max.x());
    }
}
