use std::cmp::Ordering;

use planar_types::PlanarPoint;

// Twice the signed area of the triangle (a, b, c): positive for a
// counter-clockwise turn, negative for clockwise, zero for collinear.
fn cross<P: PlanarPoint>(a: &P, b: &P, c: &P) -> f64 {
    let ux = b.x() - a.x();
    let uy = b.y() - a.y();
    let vx = c.x() - b.x();
    let vy = c.y() - b.y();
    ux * vy - vx * uy
}

/// Convex hull of a point cloud by Graham scan.
///
/// Returns the hull vertices in counter-clockwise order starting from the
/// lowest point, without a repeated closing vertex — callers close the ring
/// themselves when they need one. Duplicate input points and collinear runs
/// are dropped (the farthest collinear point survives). Inputs with fewer
/// than two points come back unchanged.
pub fn convex_hull<P: PlanarPoint>(points: &[P]) -> Vec<P> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut index: Vec<usize> = (0..points.len()).collect();

    // Lowest y first, ties by lowest x.
    index.sort_by(|&i, &j| {
        let (a, b) = (&points[i], &points[j]);
        a.y()
            .partial_cmp(&b.y())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal))
    });
    index.dedup_by(|&mut i, &mut j| points[i].x() == points[j].x() && points[i].y() == points[j].y());

    let p0 = points[index[0]];

    // Polar-angle sort about p0; collinear ties put the farther point first
    // so the dedup below keeps it.
    index[1..].sort_by(|&i, &j| {
        let ccw = cross(&p0, &points[i], &points[j]);
        if ccw > 0.0 {
            Ordering::Less
        } else if ccw < 0.0 {
            Ordering::Greater
        } else {
            points[j]
                .distance(&p0)
                .partial_cmp(&points[i].distance(&p0))
                .unwrap_or(Ordering::Equal)
        }
    });

    let mut deduped: Vec<usize> = Vec::with_capacity(index.len());
    deduped.push(index[0]);
    for &i in &index[1..] {
        if let Some(&last) = deduped.get(1..).and_then(|tail| tail.last()) {
            if cross(&p0, &points[last], &points[i]) == 0.0 {
                continue;
            }
        }
        deduped.push(i);
    }

    let mut hull: Vec<P> = Vec::with_capacity(deduped.len());
    hull.push(points[deduped[0]]);
    if deduped.len() >= 2 {
        hull.push(points[deduped[1]]);
    }

    for &i in deduped.iter().skip(2) {
        let candidate = points[i];
        while hull.len() >= 2 {
            let a = &hull[hull.len() - 2];
            let b = &hull[hull.len() - 1];
            if cross(a, b, &candidate) > 0.0 {
                break;
            }
            hull.pop();
        }
        hull.push(candidate);
    }

    hull
}
