use planar_types::{LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment};

/// Signed planar area.
///
/// Rings use the shoelace variant `Σ (xᵢ − xᵢ₊₁)(yᵢ + yᵢ₊₁) / 2`, under which
/// **counter-clockwise rings have positive area**. Polygon area is the
/// exterior area plus the interior areas — after `correct` the interiors are
/// clockwise, so their contribution is negative. One-dimensional shapes have
/// zero area.
///
/// # Examples
///
/// ```
/// use planar::Area;
/// use planar_types::ring;
///
/// let ccw = ring![(0.0, 0.0), (5.0, 0.0), (5.0, 6.0), (0.0, 6.0), (0.0, 0.0)];
/// assert_eq!(ccw.area(), 30.0);
///
/// let mut cw = ccw.clone();
/// cw.0.reverse();
/// assert_eq!(cw.area(), -30.0);
/// ```
pub trait Area {
    fn area(&self) -> f64;
}

pub(crate) fn ring_area<P: PlanarPoint>(points: &[P]) -> f64 {
    let mut area = 0.0;
    for pair in points.windows(2) {
        area += (pair[0].x() - pair[1].x()) * (pair[0].y() + pair[1].y()) / 2.0;
    }
    area
}

impl<P: PlanarPoint> Area for Segment<P> {
    fn area(&self) -> f64 {
        0.0
    }
}

impl<P: PlanarPoint> Area for LineString<P> {
    fn area(&self) -> f64 {
        0.0
    }
}

impl<P: PlanarPoint> Area for Rect<P> {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl<P: PlanarPoint> Area for Ring<P> {
    fn area(&self) -> f64 {
        ring_area(&self.0)
    }
}

impl<P: PlanarPoint> Area for Polygon<P> {
    fn area(&self) -> f64 {
        self.rings().map(|ring| ring.area()).sum()
    }
}

impl<P: PlanarPoint> Area for MultiPolygon<P> {
    fn area(&self) -> f64 {
        self.0.iter().map(|part| part.area()).sum()
    }
}
