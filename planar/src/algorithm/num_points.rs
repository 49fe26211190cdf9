use planar_types::{
    GeoPoint, LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment, XyPoint,
};

/// Structural vertex count, closing vertices included. A rectangle counts as
/// its five-vertex boundary ring.
pub trait NumPoints {
    fn num_points(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.num_points() == 0
    }
}

impl NumPoints for XyPoint {
    fn num_points(&self) -> usize {
        1
    }
}

impl NumPoints for GeoPoint {
    fn num_points(&self) -> usize {
        1
    }
}

impl<P: PlanarPoint> NumPoints for Segment<P> {
    fn num_points(&self) -> usize {
        2
    }
}

impl<P: PlanarPoint> NumPoints for Rect<P> {
    fn num_points(&self) -> usize {
        5
    }
}

impl<P: PlanarPoint> NumPoints for LineString<P> {
    fn num_points(&self) -> usize {
        self.0.len()
    }
}

impl<P: PlanarPoint> NumPoints for Ring<P> {
    fn num_points(&self) -> usize {
        self.0.len()
    }
}

impl<P: PlanarPoint> NumPoints for Polygon<P> {
    fn num_points(&self) -> usize {
        self.rings().map(|ring| ring.num_points()).sum()
    }
}

impl<P: PlanarPoint> NumPoints for MultiPolygon<P> {
    fn num_points(&self) -> usize {
        self.0.iter().map(|part| part.num_points()).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_types::{ring, xy};

    #[test]
    fn counts_are_structural() {
        assert_eq!(xy!(1.0, 2.0).num_points(), 1);
        assert_eq!(Rect::new(xy!(0.0, 0.0), xy!(1.0, 1.0)).num_points(), 5);

        let polygon = Polygon::new(
            ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)],
            vec![ring![(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)]],
        );
        assert_eq!(polygon.num_points(), 10);
    }

    #[test]
    fn empty_multi_polygon() {
        let empty: MultiPolygon<XyPoint> = MultiPolygon::default();
        assert_eq!(empty.num_points(), 0);
        assert!(empty.is_empty());
    }
}
