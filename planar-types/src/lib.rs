//! Planar geometry primitive types for indoor-mapping pipelines.
//!
//! This crate holds the value types shared by the `planar` algorithm crate
//! and the `planar-wkt` I/O crate: a point capability trait with two concrete
//! point types (local metric and geographic), segments, axis-aligned
//! rectangles, polylines, rings, polygons and multi-polygons, together with
//! the canonical comparison machinery used for deterministic output.
//!
//! Geometric semantics live in the `planar` crate; the types here are plain
//! data with the invariants documented on each type.

mod compare;
mod line_string;
mod macros;
mod multi_polygon;
mod point;
mod polygon;
mod rect;
mod ring;
mod segment;

pub use crate::compare::CanonicalCmp;
pub use crate::line_string::LineString;
pub use crate::multi_polygon::MultiPolygon;
pub use crate::point::{GeoPoint, PlanarPoint, PointKey, XyPoint, EPSILON};
pub use crate::polygon::Polygon;
pub use crate::rect::Rect;
pub use crate::ring::Ring;
pub use crate::segment::Segment;
