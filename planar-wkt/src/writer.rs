use std::fmt::Write;

use planar_types::{GeoPoint, LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment, XyPoint};

/// Serialization to WKT.
///
/// Coordinates print through `f64`'s shortest round-trip formatting, so a
/// written geometry parses back to bit-identical coordinates.
pub trait ToWkt {
    fn wkt_string(&self) -> String;
}

fn write_point<P: PlanarPoint>(out: &mut String, point: &P) {
    let _ = write!(out, "{} {}", point.x(), point.y());
}

fn write_point_list<P: PlanarPoint>(out: &mut String, points: &[P]) {
    out.push('(');
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_point(out, point);
    }
    out.push(')');
}

fn write_polygon_body<P: PlanarPoint>(out: &mut String, polygon: &Polygon<P>) {
    out.push('(');
    write_point_list(out, &polygon.exterior.0);
    for inner in &polygon.interiors {
        out.push_str(", ");
        write_point_list(out, &inner.0);
    }
    out.push(')');
}

impl ToWkt for XyPoint {
    fn wkt_string(&self) -> String {
        let mut out = String::from("POINT(");
        write_point(&mut out, self);
        out.push(')');
        out
    }
}

impl ToWkt for GeoPoint {
    fn wkt_string(&self) -> String {
        let mut out = String::from("POINT(");
        write_point(&mut out, self);
        out.push(')');
        out
    }
}

impl<P: PlanarPoint> ToWkt for Segment<P> {
    fn wkt_string(&self) -> String {
        let mut out = String::from("SEGMENT(");
        write_point(&mut out, &self.first);
        out.push_str(", ");
        write_point(&mut out, &self.second);
        out.push(')');
        out
    }
}

impl<P: PlanarPoint> ToWkt for Rect<P> {
    fn wkt_string(&self) -> String {
        let mut out = String::from("BOX(");
        write_point(&mut out, &self.min);
        out.push_str(", ");
        write_point(&mut out, &self.max);
        out.push(')');
        out
    }
}

impl<P: PlanarPoint> ToWkt for LineString<P> {
    fn wkt_string(&self) -> String {
        let mut out = String::from("LINESTRING");
        write_point_list(&mut out, &self.0);
        out
    }
}

impl<P: PlanarPoint> ToWkt for Ring<P> {
    fn wkt_string(&self) -> String {
        let mut out = String::from("LINEARRING");
        write_point_list(&mut out, &self.0);
        out
    }
}

impl<P: PlanarPoint> ToWkt for Polygon<P> {
    fn wkt_string(&self) -> String {
        let mut out = String::from("POLYGON");
        write_polygon_body(&mut out, self);
        out
    }
}

impl<P: PlanarPoint> ToWkt for MultiPolygon<P> {
    fn wkt_string(&self) -> String {
        let mut out = String::from("MULTIPOLYGON(");
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_polygon_body(&mut out, part);
        }
        out.push(')');
        out
    }
}
