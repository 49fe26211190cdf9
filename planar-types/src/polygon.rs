use crate::{PlanarPoint, Ring};

/// A polygon: one exterior ring and zero or more interior rings (holes).
///
/// After correction the exterior is counter-clockwise (positive signed area)
/// and every interior ring is clockwise. Interior rings lie inside the
/// exterior and do not cross each other or the exterior.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<P: PlanarPoint> {
    pub exterior: Ring<P>,
    pub interiors: Vec<Ring<P>>,
}

impl<P: PlanarPoint> Default for Polygon<P> {
    fn default() -> Self {
        Polygon {
            exterior: Ring::default(),
            interiors: Vec::new(),
        }
    }
}

impl<P: PlanarPoint> Polygon<P> {
    pub fn new(exterior: Ring<P>, interiors: Vec<Ring<P>>) -> Self {
        Polygon {
            exterior,
            interiors,
        }
    }

    /// All rings of the polygon, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &Ring<P>> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }
}

impl<P: PlanarPoint> From<Ring<P>> for Polygon<P> {
    fn from(exterior: Ring<P>) -> Self {
        Polygon::new(exterior, Vec::new())
    }
}
