use crate::{PlanarPoint, Segment};

/// An ordered sequence of points forming an open polyline.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString<P: PlanarPoint>(pub Vec<P>);

impl<P: PlanarPoint> Default for LineString<P> {
    fn default() -> Self {
        LineString(Vec::new())
    }
}

impl<P: PlanarPoint> LineString<P> {
    pub fn new(points: Vec<P>) -> Self {
        LineString(points)
    }

    pub fn points(&self) -> &[P] {
        &self.0
    }

    /// Consecutive segments of the polyline.
    pub fn segments(&self) -> impl Iterator<Item = Segment<P>> + '_ {
        self.0.windows(2).map(|w| Segment::new(w[0], w[1]))
    }
}

impl<P: PlanarPoint> From<Vec<P>> for LineString<P> {
    fn from(points: Vec<P>) -> Self {
        LineString(points)
    }
}

impl<P: PlanarPoint> FromIterator<P> for LineString<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        LineString(iter.into_iter().collect())
    }
}
