//! Algebraic properties of the Boolean operations and predicates, checked on
//! the fixture operands of the overlay suite.

use approx::assert_abs_diff_eq;
use planar::{
    convex_hull, Area, BooleanOps, CanonicalSort, Correct, PointIndex,
};
use planar_types::{MultiPolygon, Polygon, Ring, XyPoint};
use planar_wkt::FromWkt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPSILON: f64 = 1e-10;

fn operand(wkt: &str) -> MultiPolygon<XyPoint> {
    let mut geom: MultiPolygon<XyPoint> = MultiPolygon::from_wkt(wkt).unwrap();
    geom.correct();
    geom.canonical_sort();
    geom
}

fn operand_pairs() -> Vec<(MultiPolygon<XyPoint>, MultiPolygon<XyPoint>)> {
    vec![
        (
            operand("MULTIPOLYGON(((0 4, 2 2, 0 0, 5 0, 5 4, 0 4)))"),
            operand("MULTIPOLYGON(((1 5, 0 4, 2 0, 4 0, 5 4, 4 3, 4 5, 3 4, 1 5)))"),
        ),
        (
            operand(
                "MULTIPOLYGON(((0 2, 10 2, 10 6, 0 6, 0 2), (2 4, 3 4, 3 3, 2 3, 2 4)))",
            ),
            operand(
                "MULTIPOLYGON(((1 0, 9 0, 9 5, 6 5, 6 1, 4 1, 4 5, 1 5, 1 0), (8 3, 7 3, 7 4, 8 4, 8 3)))",
            ),
        ),
        (
            operand("MULTIPOLYGON(((-2 -2, 2 -2, 0 0, -2 -2)), ((0 0, 2 2, -2 2, 0 0)))"),
            operand("MULTIPOLYGON(((0 0, 0.5 -1.5, 2 -0.5, 0 0)), ((-0.5 1.5, -2 0.5, 0 0, -0.5 1.5)))"),
        ),
    ]
}

#[test]
fn union_and_difference_with_empty_are_identity() {
    let empty = MultiPolygon::<XyPoint>::default();
    for (a, _) in operand_pairs() {
        let mut union = a.union(&empty).unwrap();
        union.canonical_sort();
        assert_abs_diff_eq!(union, a, epsilon = EPSILON);

        let mut difference = a.difference(&empty).unwrap();
        difference.canonical_sort();
        assert_abs_diff_eq!(difference, a, epsilon = EPSILON);

        let intersection = a.intersection(&empty).unwrap();
        assert!(intersection.0.is_empty());
    }
}

#[test]
fn union_and_intersection_commute() {
    for (a, b) in operand_pairs() {
        let mut ab = a.union(&b).unwrap();
        let mut ba = b.union(&a).unwrap();
        ab.canonical_sort();
        ba.canonical_sort();
        assert_abs_diff_eq!(ab, ba, epsilon = EPSILON);

        let mut ab = a.intersection(&b).unwrap();
        let mut ba = b.intersection(&a).unwrap();
        ab.canonical_sort();
        ba.canonical_sort();
        assert_abs_diff_eq!(ab, ba, epsilon = EPSILON);
    }
}

#[test]
fn union_and_intersection_areas_are_complementary() {
    for (a, b) in operand_pairs() {
        let union = a.union(&b).unwrap().area();
        let intersection = a.intersection(&b).unwrap().area();
        assert_abs_diff_eq!(union + intersection, a.area() + b.area(), epsilon = EPSILON);
    }
}

#[test]
fn difference_and_intersection_partition_the_minuend() {
    for (a, b) in operand_pairs() {
        let difference = a.difference(&b).unwrap().area();
        let intersection = a.intersection(&b).unwrap().area();
        assert_abs_diff_eq!(difference + intersection, a.area(), epsilon = EPSILON);
    }
}

#[test]
fn winding_verdicts_on_fixture() {
    let geom = operand("MULTIPOLYGON(((0 4, 2 2, 0 0, 5 0, 5 4, 0 4)))");

    assert_eq!(geom.point_index(&XyPoint::new(3.0, 2.0)), 1);
    assert_eq!(geom.point_index(&XyPoint::new(4.9, 0.1)), 1);
    assert_eq!(geom.point_index(&XyPoint::new(0.5, 2.0)), -1);
    assert_eq!(geom.point_index(&XyPoint::new(-1.0, 2.0)), -1);
    assert_eq!(geom.point_index(&XyPoint::new(5.0, 2.0)), 0);
    assert_eq!(geom.point_index(&XyPoint::new(1.0, 1.0)), 0);
    assert_eq!(geom.point_index(&XyPoint::new(2.5, 0.0)), 0);
}

#[test]
fn hull_contains_every_input_point() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let cloud: Vec<XyPoint> = (0..200)
        .map(|_| XyPoint::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)))
        .collect();

    let mut hull = Ring(convex_hull(&cloud));
    hull.close();
    let hull = Polygon::from(hull);

    for point in &cloud {
        assert!(
            hull.point_index(point) >= 0,
            "hull does not cover {point:?}"
        );
    }
}

#[test]
fn corrected_orientation_round_trip() {
    for (a, b) in operand_pairs() {
        let union = a.union(&b).unwrap();
        for part in &union.0 {
            assert!(part.exterior.area() > 0.0);
            for inner in &part.interiors {
                assert!(inner.area() < 0.0);
            }
        }
    }
}
