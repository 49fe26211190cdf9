//! WKT reading and writing for the `planar-types` geometries.
//!
//! Seven shapes are supported: `POINT`, `SEGMENT`, `BOX`, `LINESTRING`,
//! `LINEARRING`, `POLYGON` and `MULTIPOLYGON`. The dialect is the plain
//! space-and-comma form — parenthesized vertex lists, decimal coordinates
//! separated by spaces, points separated by commas — with case-sensitive
//! tags. [`ToWkt`] and [`FromWkt`] form an inverse pair for every shape.
//!
//! ```
//! use planar_types::{MultiPolygon, XyPoint};
//! use planar_wkt::{FromWkt, ToWkt};
//!
//! let geom: MultiPolygon<XyPoint> =
//!     MultiPolygon::from_wkt("MULTIPOLYGON(((0 0, 4 0, 4 4, 0 4, 0 0)))").unwrap();
//! let round_trip = MultiPolygon::from_wkt(&geom.wkt_string()).unwrap();
//! assert_eq!(geom, round_trip);
//! ```

mod reader;
mod writer;

pub use crate::reader::{FromWkt, WktError};
pub use crate::writer::ToWkt;
