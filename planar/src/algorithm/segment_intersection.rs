use planar_types::{PlanarPoint, EPSILON};

/// Parameter snapping tolerance: solutions within `100·ε` of an endpoint are
/// pulled onto it exactly.
pub const INTERSECTION_EPSILON: f64 = 100.0 * EPSILON;

/// One contact between two segments: the parameter `u ∈ [0, 1]` along the
/// first segment, `v ∈ [0, 1]` along the second, and the contact point
/// itself. When a parameter is exactly 0 or 1 the point is a verbatim copy
/// of the corresponding endpoint, never a rounded interpolation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Contact<P: PlanarPoint> {
    pub u: f64,
    pub v: f64,
    pub point: P,
}

/// Result of [`segment_intersection`]: zero, one or two contact points.
///
/// Collinear overlapping segments touch in up to two points (the overlap
/// endpoints); everything else yields at most one.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SegmentIntersection<P: PlanarPoint> {
    Disjoint,
    One(Contact<P>),
    Two(Contact<P>, Contact<P>),
}

impl<P: PlanarPoint> SegmentIntersection<P> {
    pub fn count(&self) -> usize {
        match self {
            SegmentIntersection::Disjoint => 0,
            SegmentIntersection::One(_) => 1,
            SegmentIntersection::Two(..) => 2,
        }
    }

    /// Contacts in order of discovery.
    pub fn iter(&self) -> impl Iterator<Item = &Contact<P>> {
        let (first, second) = match self {
            SegmentIntersection::Disjoint => (None, None),
            SegmentIntersection::One(c) => (Some(c), None),
            SegmentIntersection::Two(c1, c2) => (Some(c1), Some(c2)),
        };
        first.into_iter().chain(second)
    }
}

fn snap_param(value: f64) -> f64 {
    if value.abs() < INTERSECTION_EPSILON {
        0.0
    } else if (value - 1.0).abs() < INTERSECTION_EPSILON {
        1.0
    } else {
        value
    }
}

// When the segments share an endpoint exactly, the linear system is rewritten
// so that the shared endpoint sits at the origin of both parameterizations.
// The solved parameter then comes out as an exact 0 rather than a rounded
// residue, and the public (u, v) are mapped back through this mode.
#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Plain,          // also covers p1 == q1, where the right-hand side is exactly zero
    FirstSecond,    // p1 == q2
    SecondFirst,    // p2 == q1
    SecondSecond,   // p2 == q2
}

impl Mode {
    fn u_from(self, u: f64) -> f64 {
        match self {
            Mode::Plain | Mode::FirstSecond => u,
            Mode::SecondFirst | Mode::SecondSecond => 1.0 - u,
        }
    }

    fn v_from(self, v: f64) -> f64 {
        match self {
            Mode::Plain | Mode::SecondFirst => v,
            Mode::FirstSecond | Mode::SecondSecond => 1.0 - v,
        }
    }
}

/// Intersects the closed segments `[p1, p2]` and `[q1, q2]`.
///
/// Returns every contact with parameters along both segments. Shared
/// endpoints are reported with exact 0/1 parameters and the endpoint itself
/// as the contact point; parameters within [`INTERSECTION_EPSILON`] of 0 or 1
/// are snapped before the range check, so near-endpoint crossings never
/// produce phantom vertices just off a true endpoint.
pub fn segment_intersection<P: PlanarPoint>(
    p1: &P,
    p2: &P,
    q1: &P,
    q2: &P,
) -> SegmentIntersection<P> {
    let (p1x, p1y) = (p1.x(), p1.y());
    let (p2x, p2y) = (p2.x(), p2.y());
    let (q1x, q1y) = (q1.x(), q1.y());
    let (q2x, q2y) = (q2.x(), q2.y());

    // Disjoint bounding boxes cannot touch.
    if p1x.max(p2x) < q1x.min(q2x)
        || q1x.max(q2x) < p1x.min(p2x)
        || p1y.max(p2y) < q1y.min(q2y)
        || q1y.max(q2y) < p1y.min(p2y)
    {
        return SegmentIntersection::Disjoint;
    }

    let (mode, a11, a21, a12, a22, b1, b2) = if p1x == q2x && p1y == q2y {
        (
            Mode::FirstSecond,
            p2x - p1x,
            p2y - p1y,
            q2x - q1x,
            q2y - q1y,
            0.0,
            0.0,
        )
    } else if p2x == q1x && p2y == q1y {
        (
            Mode::SecondFirst,
            p1x - p2x,
            p1y - p2y,
            q1x - q2x,
            q1y - q2y,
            0.0,
            0.0,
        )
    } else if p2x == q2x && p2y == q2y {
        (
            Mode::SecondSecond,
            p1x - p2x,
            p1y - p2y,
            q2x - q1x,
            q2y - q1y,
            0.0,
            0.0,
        )
    } else {
        (
            Mode::Plain,
            p2x - p1x,
            p2y - p1y,
            q1x - q2x,
            q1y - q2y,
            q1x - p1x,
            q1y - p1y,
        )
    };

    let det = a11 * a22 - a12 * a21;
    let det1 = b1 * a22 - a12 * b2;
    let det2 = a11 * b2 - b1 * a21;

    if det != 0.0 {
        let u = snap_param(det1 / det);
        let v = snap_param(det2 / det);

        if !u.is_finite() || !v.is_finite() || !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v)
        {
            return SegmentIntersection::Disjoint;
        }

        let u1 = mode.u_from(u);
        let v1 = mode.v_from(v);

        let point = if u1 == 0.0 {
            *p1
        } else if u1 == 1.0 {
            *p2
        } else if v1 == 0.0 {
            *q1
        } else if v1 == 1.0 {
            *q2
        } else {
            p1.scale(1.0 - u1).add(&p2.scale(u1))
        };

        return SegmentIntersection::One(Contact { u: u1, v: v1, point });
    }

    if det1 != 0.0 || det2 != 0.0 {
        // Parallel but not collinear.
        return SegmentIntersection::Disjoint;
    }

    // Collinear segments: probe the four boundary parameters, keeping the
    // first two distinct contacts. The v = 0 / v = 1 probes use an open
    // u-interval so that contacts already found at u = 0 / u = 1 do not
    // repeat.
    let mut contacts: Vec<Contact<P>> = Vec::with_capacity(2);

    let solve_v = |rhs1: f64, rhs2: f64| {
        if a12.abs() > a22.abs() {
            rhs1 / a12
        } else {
            rhs2 / a22
        }
    };
    let solve_u = |rhs1: f64, rhs2: f64| {
        if a11.abs() > a21.abs() {
            rhs1 / a11
        } else {
            rhs2 / a21
        }
    };

    // u = 0
    let v = snap_param(solve_v(b1, b2));
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        contacts.push(Contact {
            u: mode.u_from(0.0),
            v: mode.v_from(v),
            point: match mode {
                Mode::Plain | Mode::FirstSecond => *p1,
                _ => *p2,
            },
        });
    }

    // u = 1
    let v = snap_param(solve_v(b1 - a11, b2 - a21));
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        contacts.push(Contact {
            u: mode.u_from(1.0),
            v: mode.v_from(v),
            point: match mode {
                Mode::Plain | Mode::FirstSecond => *p2,
                _ => *p1,
            },
        });
    }

    // v = 0
    if contacts.len() < 2 {
        let u = snap_param(solve_u(b1, b2));
        if u.is_finite() && 0.0 < u && u < 1.0 {
            contacts.push(Contact {
                u: mode.u_from(u),
                v: mode.v_from(0.0),
                point: match mode {
                    Mode::Plain | Mode::SecondFirst => *q1,
                    _ => *q2,
                },
            });
        }
    }

    // v = 1
    if contacts.len() < 2 {
        let u = snap_param(solve_u(b1 - a12, b2 - a22));
        if u.is_finite() && 0.0 < u && u < 1.0 {
            contacts.push(Contact {
                u: mode.u_from(u),
                v: mode.v_from(1.0),
                point: match mode {
                    Mode::Plain | Mode::SecondFirst => *q2,
                    _ => *q1,
                },
            });
        }
    }

    match contacts.len() {
        0 => SegmentIntersection::Disjoint,
        1 => SegmentIntersection::One(contacts[0]),
        _ => SegmentIntersection::Two(contacts[0], contacts[1]),
    }
}
