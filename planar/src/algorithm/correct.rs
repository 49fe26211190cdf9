use planar_types::{CanonicalCmp, MultiPolygon, PlanarPoint, Polygon, Ring};

use crate::algorithm::area::ring_area;

/// Restores the ring invariants in place: every ring is closed (the first
/// vertex repeated at the end), exteriors wind counter-clockwise and
/// interiors clockwise. Rings with fewer than three vertices are left alone.
pub trait Correct {
    fn correct(&mut self);
}

pub(crate) fn correct_ring<P: PlanarPoint>(ring: &mut Ring<P>, is_outer: bool) {
    if ring.0.len() < 3 {
        return;
    }

    ring.close();

    let clockwise = ring_area(&ring.0) < 0.0;
    if clockwise == is_outer {
        ring.0.reverse();
    }
}

impl<P: PlanarPoint> Correct for Ring<P> {
    /// A standalone ring is corrected as an exterior.
    fn correct(&mut self) {
        correct_ring(self, true);
    }
}

impl<P: PlanarPoint> Correct for Polygon<P> {
    fn correct(&mut self) {
        correct_ring(&mut self.exterior, true);
        for inner in &mut self.interiors {
            correct_ring(inner, false);
        }
    }
}

impl<P: PlanarPoint> Correct for MultiPolygon<P> {
    fn correct(&mut self) {
        for part in &mut self.0 {
            part.correct();
        }
    }
}

/// Rewrites a geometry into its canonical form without changing its meaning:
/// each ring is rotated so the lexicographically smallest vertex comes first,
/// interior rings are sorted within their polygon and parts within their
/// multi-polygon. Canonical forms of geometrically equal inputs compare
/// equal, which is what the test oracles rely on.
pub trait CanonicalSort {
    fn canonical_sort(&mut self);
}

fn sort_ring<P: PlanarPoint>(ring: &mut Ring<P>) {
    if ring.0.len() < 3 {
        return;
    }

    // The closing vertex stays out of the rotation and is patched afterwards.
    let open = ring.0.len() - 1;
    let min_index = (0..open)
        .min_by(|&i, &j| ring.0[i].lex_cmp(&ring.0[j]))
        .unwrap_or(0);
    ring.0[..open].rotate_left(min_index);
    ring.0[open] = ring.0[0];
}

impl<P: PlanarPoint> CanonicalSort for Ring<P> {
    fn canonical_sort(&mut self) {
        sort_ring(self);
    }
}

impl<P: PlanarPoint> CanonicalSort for Polygon<P> {
    fn canonical_sort(&mut self) {
        sort_ring(&mut self.exterior);
        for inner in &mut self.interiors {
            sort_ring(inner);
        }
        self.interiors.sort_by(|a, b| a.canonical_cmp(b));
    }
}

impl<P: PlanarPoint> CanonicalSort for MultiPolygon<P> {
    fn canonical_sort(&mut self) {
        for part in &mut self.0 {
            part.canonical_sort();
        }
        self.0.sort_by(|a, b| a.canonical_cmp(b));
    }
}
