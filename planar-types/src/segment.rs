use crate::PlanarPoint;

/// A directed straight segment between two points.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<P: PlanarPoint> {
    pub first: P,
    pub second: P,
}

impl<P: PlanarPoint> Segment<P> {
    pub fn new(first: P, second: P) -> Self {
        Segment { first, second }
    }

    pub fn midpoint(&self) -> P {
        self.first.midpoint(&self.second)
    }

    pub fn length(&self) -> f64 {
        self.first.distance(&self.second)
    }
}

impl<P: PlanarPoint> From<(P, P)> for Segment<P> {
    fn from(points: (P, P)) -> Self {
        Segment::new(points.0, points.1)
    }
}
