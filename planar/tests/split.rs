//! Split–recombine conservation: clipping a region against the two halves of
//! a covering box and summing the areas must reproduce the original area.

use planar::{Area, BooleanOps, BoundingRect, Correct, PlanarPoint};
use planar_types::{MultiPolygon, Rect, XyPoint};
use planar_wkt::FromWkt;

const EPSILON: f64 = 1e-10;

// An office-floor style outline: concave outer boundaries, two parts, holes.
const FLOOR: &str = "MULTIPOLYGON(\
    ((0 0, 14 0, 14 3, 11 3, 11 7, 14 7, 14 10, 0 10, 0 7, 2 7, 2 5, 0 5, 0 0), \
     (3 1.5, 3 3.5, 5.5 3.5, 5.5 1.5, 3 1.5), \
     (7 6, 7 8.5, 9.5 8.5, 9.5 6, 7 6)), \
    ((16 2, 21 2, 21 9, 16 9, 16 2), \
     (17 3, 17 4.25, 18.5 4.25, 18.5 3, 17 3)))";

enum Axis {
    X,
    Y,
}

fn split_and_recombine(wkt: &str, axis: Axis) {
    let mut geom: MultiPolygon<XyPoint> = MultiPolygon::from_wkt(wkt).unwrap();
    geom.correct();

    let area = geom.area();
    assert!(area > 0.0);

    let bound = geom.bounding_rect();
    let min = XyPoint::new(bound.min.x() - 1.0, bound.min.y() - 1.0);
    let max = XyPoint::new(bound.max.x() + 1.0, bound.max.y() + 1.0);

    let (lower, upper) = match axis {
        Axis::X => {
            let mid = (min.x + max.x) / 2.0;
            (
                Rect::new(min, XyPoint::new(mid, max.y)),
                Rect::new(XyPoint::new(mid, min.y), max),
            )
        }
        Axis::Y => {
            let mid = (min.y + max.y) / 2.0;
            (
                Rect::new(min, XyPoint::new(max.x, mid)),
                Rect::new(XyPoint::new(min.x, mid), max),
            )
        }
    };

    let area_lower = geom.intersection(&lower).unwrap().area();
    let area_upper = geom.intersection(&upper).unwrap().area();

    let relative_error = ((area_lower + area_upper) / area - 1.0).abs();
    assert!(
        relative_error <= EPSILON,
        "area not conserved: {} + {} vs {} (relative error {})",
        area_lower,
        area_upper,
        area,
        relative_error
    );
}

#[test]
fn split_floor_along_x() {
    split_and_recombine(FLOOR, Axis::X);
}

#[test]
fn split_floor_along_y() {
    split_and_recombine(FLOOR, Axis::Y);
}

#[test]
fn split_triangle_pair_along_both_axes() {
    // Two triangles sharing a single vertex.
    let pair = "MULTIPOLYGON(((0 0, 8 1, 7 4, 0 0)), ((0 0, 4 7, -2 6, 0 0)))";
    split_and_recombine(pair, Axis::X);
    split_and_recombine(pair, Axis::Y);
}
