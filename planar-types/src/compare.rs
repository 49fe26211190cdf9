use std::cmp::Ordering;

use approx::AbsDiffEq;

use crate::{LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment};

/// Deterministic lexicographic order on the tree of vertex sequences.
///
/// Two geometries compare by walking their vertices in structure order and
/// comparing each pair with [`PlanarPoint::lex_cmp`]; a shorter sequence that
/// is a prefix of a longer one compares less. Combined with `CanonicalSort`
/// this yields a total order suitable for test oracles and stable output.
pub trait CanonicalCmp {
    fn canonical_cmp(&self, other: &Self) -> Ordering;

    fn canonical_lt(&self, other: &Self) -> bool {
        self.canonical_cmp(other) == Ordering::Less
    }

    fn canonical_gt(&self, other: &Self) -> bool {
        self.canonical_cmp(other) == Ordering::Greater
    }
}

impl<P: PlanarPoint> CanonicalCmp for P {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.lex_cmp(other)
    }
}

fn compare_point_seq<P: PlanarPoint>(lhs: &[P], rhs: &[P]) -> Ordering {
    for (a, b) in lhs.iter().zip(rhs.iter()) {
        let ord = a.lex_cmp(b);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    lhs.len().cmp(&rhs.len())
}

impl<P: PlanarPoint> CanonicalCmp for Segment<P> {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.first
            .lex_cmp(&other.first)
            .then_with(|| self.second.lex_cmp(&other.second))
    }
}

impl<P: PlanarPoint> CanonicalCmp for Rect<P> {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.min
            .lex_cmp(&other.min)
            .then_with(|| self.max.lex_cmp(&other.max))
    }
}

impl<P: PlanarPoint> CanonicalCmp for LineString<P> {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        compare_point_seq(&self.0, &other.0)
    }
}

impl<P: PlanarPoint> CanonicalCmp for Ring<P> {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        compare_point_seq(&self.0, &other.0)
    }
}

impl<P: PlanarPoint> CanonicalCmp for Polygon<P> {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        let ord = self.exterior.canonical_cmp(&other.exterior);
        if ord != Ordering::Equal {
            return ord;
        }
        for (a, b) in self.interiors.iter().zip(other.interiors.iter()) {
            let ord = a.canonical_cmp(b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.interiors.len().cmp(&other.interiors.len())
    }
}

impl<P: PlanarPoint> CanonicalCmp for MultiPolygon<P> {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            let ord = a.canonical_cmp(b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

// Tolerance-based equality. Sequences must agree in length; vertices compare
// coordinate-wise within epsilon.

impl<P> AbsDiffEq for Segment<P>
where
    P: PlanarPoint + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.first.abs_diff_eq(&other.first, epsilon)
            && self.second.abs_diff_eq(&other.second, epsilon)
    }
}

impl<P> AbsDiffEq for Rect<P>
where
    P: PlanarPoint + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

fn point_seq_abs_diff_eq<P>(lhs: &[P], rhs: &[P], epsilon: f64) -> bool
where
    P: PlanarPoint + AbsDiffEq<Epsilon = f64>,
{
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
}

impl<P> AbsDiffEq for LineString<P>
where
    P: PlanarPoint + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        point_seq_abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

impl<P> AbsDiffEq for Ring<P>
where
    P: PlanarPoint + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        point_seq_abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

impl<P> AbsDiffEq for Polygon<P>
where
    P: PlanarPoint + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.exterior.abs_diff_eq(&other.exterior, epsilon)
            && self.interiors.len() == other.interiors.len()
            && self
                .interiors
                .iter()
                .zip(other.interiors.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<P> AbsDiffEq for MultiPolygon<P>
where
    P: PlanarPoint + AbsDiffEq<Epsilon = f64>,
{
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
