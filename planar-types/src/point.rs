use std::cmp::Ordering;

use approx::AbsDiffEq;

/// Absolute snapping grid used throughout the library.
///
/// Every coordinate entering the overlay engine is quantized to a multiple of
/// this constant, so that near-coincident points collapse onto one grid node
/// and endpoint ties become detectable by exact comparison. The value is
/// calibrated for local metric coordinates; geographic consumers are expected
/// to reproject into a local frame rather than operate in raw degrees.
pub const EPSILON: f64 = 1e-12;

/// Capability interface for a 2D point with binary64 coordinates.
///
/// The geometry types and every algorithm in the workspace are generic over
/// this trait, so the same engine runs on [`XyPoint`] (local metres) and
/// [`GeoPoint`] (longitude as x, latitude as y) without caring which one it
/// holds.
pub trait PlanarPoint: Copy + PartialEq + std::fmt::Debug {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn from_xy(x: f64, y: f64) -> Self;

    fn add(&self, rhs: &Self) -> Self {
        Self::from_xy(self.x() + rhs.x(), self.y() + rhs.y())
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self::from_xy(self.x() - rhs.x(), self.y() - rhs.y())
    }

    fn scale(&self, factor: f64) -> Self {
        Self::from_xy(self.x() * factor, self.y() * factor)
    }

    fn div(&self, divisor: f64) -> Self {
        Self::from_xy(self.x() / divisor, self.y() / divisor)
    }

    fn midpoint(&self, rhs: &Self) -> Self {
        self.add(rhs).div(2.0)
    }

    /// Quantizes both coordinates to the nearest multiple of [`EPSILON`].
    fn snap(&self) -> Self {
        Self::from_xy(
            (self.x() / EPSILON).round() * EPSILON,
            (self.y() / EPSILON).round() * EPSILON,
        )
    }

    fn distance(&self, rhs: &Self) -> f64 {
        let dx = self.x() - rhs.x();
        let dy = self.y() - rhs.y();
        (dx * dx + dy * dy).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Lexicographic order: x first, then y. Incomparable coordinates (NaN)
    /// collapse to `Equal`, matching the raw `<`/`>` comparison chain.
    fn lex_cmp(&self, rhs: &Self) -> Ordering {
        if self.x() < rhs.x() {
            Ordering::Less
        } else if self.x() > rhs.x() {
            Ordering::Greater
        } else if self.y() < rhs.y() {
            Ordering::Less
        } else if self.y() > rhs.y() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Bit-exact hashable key. `-0.0` is folded onto `0.0` so that both spell
    /// the same grid node in the overlay point map.
    fn key(&self) -> PointKey {
        fn fold_zero(value: f64) -> f64 {
            if value == 0.0 {
                0.0
            } else {
                value
            }
        }
        PointKey {
            x: fold_zero(self.x()).to_bits(),
            y: fold_zero(self.y()).to_bits(),
        }
    }
}

/// Exact-coordinate hash key for a [`PlanarPoint`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PointKey {
    x: u64,
    y: u64,
}

/// A point in a local metric frame; coordinates are metres.
///
/// # Examples
///
/// ```
/// use planar_types::{PlanarPoint, XyPoint};
///
/// let p = XyPoint { x: 1.5, y: -2.0 };
/// let q = p.add(&XyPoint { x: 0.5, y: 2.0 });
/// assert_eq!(q, XyPoint { x: 2.0, y: 0.0 });
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
}

impl XyPoint {
    pub fn new(x: f64, y: f64) -> Self {
        XyPoint { x, y }
    }
}

impl PlanarPoint for XyPoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn from_xy(x: f64, y: f64) -> Self {
        XyPoint { x, y }
    }
}

impl From<(f64, f64)> for XyPoint {
    fn from(coords: (f64, f64)) -> Self {
        XyPoint {
            x: coords.0,
            y: coords.1,
        }
    }
}

use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for XyPoint {
    type Output = XyPoint;

    fn add(self, rhs: XyPoint) -> XyPoint {
        XyPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for XyPoint {
    type Output = XyPoint;

    fn sub(self, rhs: XyPoint) -> XyPoint {
        XyPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for XyPoint {
    type Output = XyPoint;

    fn neg(self) -> XyPoint {
        XyPoint::new(-self.x, -self.y)
    }
}

impl Mul<f64> for XyPoint {
    type Output = XyPoint;

    fn mul(self, rhs: f64) -> XyPoint {
        XyPoint::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for XyPoint {
    type Output = XyPoint;

    fn div(self, rhs: f64) -> XyPoint {
        XyPoint::new(self.x / rhs, self.y / rhs)
    }
}

impl AbsDiffEq for XyPoint {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

/// A geographic point. The planar engine reads longitude as x and latitude
/// as y; all other point semantics are identical to [`XyPoint`].
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }
}

impl PlanarPoint for GeoPoint {
    fn x(&self) -> f64 {
        self.longitude
    }

    fn y(&self) -> f64 {
        self.latitude
    }

    fn from_xy(x: f64, y: f64) -> Self {
        GeoPoint {
            latitude: y,
            longitude: x,
        }
    }
}

impl AbsDiffEq for GeoPoint {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.latitude, &other.latitude, epsilon)
            && f64::abs_diff_eq(&self.longitude, &other.longitude, epsilon)
    }
}
