use crate::{PlanarPoint, Segment};

/// A closed sequence of points: the first vertex is repeated as the last.
///
/// Construction does not enforce closure — rings read from external data may
/// arrive open and are closed by `Correct` (or [`Ring::close`]) before use.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring<P: PlanarPoint>(pub Vec<P>);

impl<P: PlanarPoint> Default for Ring<P> {
    fn default() -> Self {
        Ring(Vec::new())
    }
}

impl<P: PlanarPoint> Ring<P> {
    pub fn new(points: Vec<P>) -> Self {
        Ring(points)
    }

    pub fn points(&self) -> &[P] {
        &self.0
    }

    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Appends the first vertex if the ring is not already closed.
    pub fn close(&mut self) {
        if self.0.len() >= 2 && !self.is_closed() {
            let first = self.0[0];
            self.0.push(first);
        }
    }

    /// The boundary segments `points[i] → points[i + 1]`.
    pub fn segments(&self) -> impl Iterator<Item = Segment<P>> + '_ {
        self.0.windows(2).map(|w| Segment::new(w[0], w[1]))
    }
}

impl<P: PlanarPoint> From<Vec<P>> for Ring<P> {
    fn from(points: Vec<P>) -> Self {
        Ring(points)
    }
}

impl<P: PlanarPoint> FromIterator<P> for Ring<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Ring(iter.into_iter().collect())
    }
}
