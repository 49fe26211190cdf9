//! Robust Boolean operations and buffering over planar polygonal regions.
//!
//! The crate implements a dual-color planar overlay engine for union,
//! intersection and difference of boxes, rings, polygons and multi-polygons,
//! together with the predicates it is built on: segment intersection with
//! snap-to-endpoint tolerances, winding-parity point location, Graham-scan
//! convex hull and orientation correction. A Minkowski [`Buffer`] operator is
//! layered on top of the overlay.
//!
//! Everything is generic over [`planar_types::PlanarPoint`], an inexact
//! binary64 kernel with a global snapping grid of
//! [`planar_types::EPSILON`] = 1e-12. The engine is single-threaded and
//! stateless: every operation is pure over its inputs, and all intermediate
//! overlay state lives and dies within one call.
//!
//! # Examples
//!
//! ```
//! use planar::{Area, BooleanOps, Correct};
//! use planar_types::ring;
//!
//! let mut a = ring![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)];
//! let mut b = ring![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0), (1.0, 1.0)];
//! a.correct();
//! b.correct();
//!
//! let union = a.union(&b).unwrap();
//! assert_eq!(union.area(), 7.0);
//! ```

pub use planar_types;
pub use planar_types::{
    CanonicalCmp, GeoPoint, LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment,
    XyPoint, EPSILON,
};

pub mod algorithm;
pub mod reproject;

pub use crate::algorithm::*;
