use crate::{PlanarPoint, Polygon};

/// A collection of polygons whose part boundaries do not cross each other.
///
/// An empty `MultiPolygon` is valid and denotes the empty set — it is the
/// result of, for example, intersecting disjoint operands.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon<P: PlanarPoint>(pub Vec<Polygon<P>>);

impl<P: PlanarPoint> Default for MultiPolygon<P> {
    fn default() -> Self {
        MultiPolygon(Vec::new())
    }
}

impl<P: PlanarPoint> MultiPolygon<P> {
    pub fn new(parts: Vec<Polygon<P>>) -> Self {
        MultiPolygon(parts)
    }

    pub fn parts(&self) -> &[Polygon<P>] {
        &self.0
    }
}

impl<P: PlanarPoint> From<Polygon<P>> for MultiPolygon<P> {
    fn from(polygon: Polygon<P>) -> Self {
        MultiPolygon(vec![polygon])
    }
}

impl<P: PlanarPoint> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        MultiPolygon(parts)
    }
}

impl<P: PlanarPoint> FromIterator<Polygon<P>> for MultiPolygon<P> {
    fn from_iter<I: IntoIterator<Item = Polygon<P>>>(iter: I) -> Self {
        MultiPolygon(iter.into_iter().collect())
    }
}
