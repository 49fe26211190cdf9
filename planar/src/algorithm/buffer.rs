use std::f64::consts::PI;

use planar_types::{MultiPolygon, PlanarPoint, Polygon, Ring, EPSILON};

use crate::algorithm::bool_ops::{BooleanOps, OpType, OverlayError};
use crate::algorithm::convex_hull::convex_hull;
use crate::algorithm::correct::Correct;
use crate::algorithm::edges_iter::EdgesIter;

/// Minkowski buffering by iterated union of edge capsules.
///
/// Every boundary edge contributes a capsule: the convex hull of `2k` points
/// sampled on a circle of `radius` around each endpoint, `k` being the
/// per-semicircle resolution. The capsules are unioned into the input one by
/// one, producing a rounded-corner inflation at angular resolution `π / k`.
/// The cost is O(E · U) for E edges and union cost U; there is no spatial
/// acceleration, so keep operand edge counts modest.
pub trait Buffer<P: PlanarPoint> {
    /// Buffers with `skip_errors` enabled: capsules whose union fails are
    /// dropped with a warning instead of aborting the whole operation.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not above the snapping epsilon or if
    /// `points_per_semicircle < 2` — both are caller contract violations.
    fn buffer(
        &self,
        radius: f64,
        points_per_semicircle: u32,
    ) -> Result<MultiPolygon<P>, OverlayError> {
        self.buffer_with_options(radius, points_per_semicircle, true)
    }

    fn buffer_with_options(
        &self,
        radius: f64,
        points_per_semicircle: u32,
        skip_errors: bool,
    ) -> Result<MultiPolygon<P>, OverlayError>;
}

fn edge_capsule<P: PlanarPoint>(p1: &P, p2: &P, radius: f64, k: u32) -> Polygon<P> {
    let delta = PI / k as f64;

    let mut points: Vec<P> = Vec::with_capacity(4 * k as usize);
    for center in [p1, p2] {
        for i in 0..2 * k {
            let alpha = i as f64 * delta;
            points.push(
                P::from_xy(
                    center.x() + radius * alpha.cos(),
                    center.y() + radius * alpha.sin(),
                )
                .snap(),
            );
        }
    }

    let mut capsule = Polygon::from(Ring(convex_hull(&points)));
    capsule.correct();
    capsule
}

impl<P, G> Buffer<P> for G
where
    P: PlanarPoint,
    G: EdgesIter<P>,
{
    fn buffer_with_options(
        &self,
        radius: f64,
        points_per_semicircle: u32,
        skip_errors: bool,
    ) -> Result<MultiPolygon<P>, OverlayError> {
        assert!(
            radius > EPSILON,
            "buffer radius must exceed the snapping epsilon"
        );
        assert!(
            points_per_semicircle >= 2,
            "buffer needs at least two points per semicircle"
        );

        let capsules: Vec<Polygon<P>> = self
            .edges(false)
            .map(|edge| edge_capsule(&edge.first, &edge.second, radius, points_per_semicircle))
            .collect();

        // Seed the accumulator with the input itself, re-expressed as a
        // multi-polygon through a union with the empty set.
        let mut result = self.boolean_op(&MultiPolygon::<P>::default(), OpType::Union)?;

        for capsule in capsules {
            match result.boolean_op(&capsule, OpType::Union) {
                Ok(merged) => result = merged,
                Err(error) if skip_errors => {
                    log::warn!("skipping buffer capsule: {error}");
                }
                Err(error) => return Err(error),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::area::Area;
    use crate::algorithm::point_index::PointIndex;
    use planar_types::{ring, xy};

    #[test]
    fn capsule_covers_both_endpoints() {
        let capsule = edge_capsule(&xy!(0.0, 0.0), &xy!(3.0, 0.0), 0.5, 4);
        assert!(capsule.exterior.is_closed());
        assert!(capsule.exterior.area() > 0.0);
        assert_eq!(capsule.point_index(&xy!(0.0, 0.0)), 1);
        assert_eq!(capsule.point_index(&xy!(3.0, 0.0)), 1);
        assert_eq!(capsule.point_index(&xy!(1.5, 0.0)), 1);
        assert_eq!(capsule.point_index(&xy!(1.5, 1.0)), -1);
    }

    #[test]
    fn square_buffer_grows_monotonically() {
        let square = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)];
        let buffered = square.buffer_with_options(0.5, 2, false).unwrap();
        assert!(buffered.area() > square.area());
        // Octagonal inflation with k = 2: 16 + 4·(4·0.5) + corner cuts.
        assert_eq!(buffered.0.len(), 1);
        approx::assert_abs_diff_eq!(buffered.area(), 24.5, epsilon = 1e-9);
    }

    #[test]
    #[should_panic(expected = "radius")]
    fn tiny_radius_is_a_contract_violation() {
        let square = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        let _ = square.buffer(0.0, 2);
    }
}
