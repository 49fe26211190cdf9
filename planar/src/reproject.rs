//! Flat-earth reprojection between geographic and local metric frames.
//!
//! The mapping is an affine approximation around a bind point: longitude
//! deltas scale with the circumference of the bind latitude's parallel,
//! latitude deltas with the polar circumference. Good to centimetres at
//! building scale, which is the intended domain; it is not a geodesic
//! projection.
//!
//! Reprojected rings and polygons are corrected before they are returned, so
//! an open or mis-oriented input comes out closed and consistently wound on
//! the other side of the frame change.

use planar_types::{GeoPoint, MultiPolygon, PlanarPoint, Polygon, Ring, XyPoint, EPSILON};

use crate::algorithm::correct::Correct;

const EQUATOR_CIRCUMFERENCE_METERS: f64 = 40_075_160.0;
const POLE_CIRCUMFERENCE_METERS: f64 = 40_008_000.0;

/// Wraps `value` into the half-open interval `[min, max)`.
fn normalized_angle(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span < EPSILON {
        return (min + max) / 2.0;
    }
    value - ((value - min) / span).floor() * span
}

fn parallel_circumference(latitude: f64) -> f64 {
    EQUATOR_CIRCUMFERENCE_METERS * latitude.to_radians().cos()
}

pub fn geo_to_local(point: &GeoPoint, bind_point: &GeoPoint) -> XyPoint {
    let delta_lat = point.latitude - bind_point.latitude;
    let delta_lon = normalized_angle(point.longitude - bind_point.longitude, -180.0, 180.0);
    XyPoint::new(
        delta_lon * (parallel_circumference(bind_point.latitude) / 360.0),
        delta_lat * (POLE_CIRCUMFERENCE_METERS / 360.0),
    )
}

pub fn local_to_geo(point: &XyPoint, bind_point: &GeoPoint) -> GeoPoint {
    let latitude = point.y * (360.0 / POLE_CIRCUMFERENCE_METERS) + bind_point.latitude;
    let longitude = normalized_angle(
        point.x * 360.0 / parallel_circumference(bind_point.latitude) + bind_point.longitude,
        -180.0,
        180.0,
    );
    GeoPoint::new(latitude, longitude)
}

fn map_ring<Src: PlanarPoint, Dst: PlanarPoint>(
    ring: &Ring<Src>,
    f: &impl Fn(&Src) -> Dst,
) -> Ring<Dst> {
    let mut result: Ring<Dst> = ring.0.iter().map(f).collect();
    result.correct();
    result
}

fn map_polygon<Src: PlanarPoint, Dst: PlanarPoint>(
    polygon: &Polygon<Src>,
    f: &impl Fn(&Src) -> Dst,
) -> Polygon<Dst> {
    let mut result = Polygon::new(
        map_ring(&polygon.exterior, f),
        polygon
            .interiors
            .iter()
            .map(|inner| map_ring(inner, f))
            .collect(),
    );
    result.correct();
    result
}

pub fn geo_to_local_ring(ring: &Ring<GeoPoint>, bind_point: &GeoPoint) -> Ring<XyPoint> {
    map_ring(ring, &|p| geo_to_local(p, bind_point))
}

pub fn local_to_geo_ring(ring: &Ring<XyPoint>, bind_point: &GeoPoint) -> Ring<GeoPoint> {
    map_ring(ring, &|p| local_to_geo(p, bind_point))
}

pub fn geo_to_local_polygon(polygon: &Polygon<GeoPoint>, bind_point: &GeoPoint) -> Polygon<XyPoint> {
    map_polygon(polygon, &|p| geo_to_local(p, bind_point))
}

pub fn local_to_geo_polygon(polygon: &Polygon<XyPoint>, bind_point: &GeoPoint) -> Polygon<GeoPoint> {
    map_polygon(polygon, &|p| local_to_geo(p, bind_point))
}

pub fn geo_to_local_multi_polygon(
    geometry: &MultiPolygon<GeoPoint>,
    bind_point: &GeoPoint,
) -> MultiPolygon<XyPoint> {
    geometry
        .0
        .iter()
        .map(|part| geo_to_local_polygon(part, bind_point))
        .collect()
}

pub fn local_to_geo_multi_polygon(
    geometry: &MultiPolygon<XyPoint>,
    bind_point: &GeoPoint,
) -> MultiPolygon<GeoPoint> {
    geometry
        .0
        .iter()
        .map(|part| local_to_geo_polygon(part, bind_point))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::area::Area;
    use approx::assert_abs_diff_eq;
    use planar_types::ring;

    #[test]
    fn round_trip_at_building_scale() {
        let bind = GeoPoint::new(55.751, 37.617);
        let point = GeoPoint::new(55.7512, 37.6174);
        let local = geo_to_local(&point, &bind);
        let back = local_to_geo(&local, &bind);
        assert_abs_diff_eq!(back.latitude, point.latitude, epsilon = 1e-9);
        assert_abs_diff_eq!(back.longitude, point.longitude, epsilon = 1e-9);
    }

    #[test]
    fn bind_point_maps_to_origin() {
        let bind = GeoPoint::new(-33.86, 151.21);
        let local = geo_to_local(&bind, &bind);
        assert_abs_diff_eq!(local.x, 0.0);
        assert_abs_diff_eq!(local.y, 0.0);
    }

    #[test]
    fn longitude_wraps_across_antimeridian() {
        let bind = GeoPoint::new(0.0, 179.5);
        let point = GeoPoint::new(0.0, -179.5);
        let local = geo_to_local(&point, &bind);
        // One degree east of the bind point, not 359 degrees west.
        assert!(local.x > 0.0);
        assert!(local.x < 2.0 * EQUATOR_CIRCUMFERENCE_METERS / 360.0);
    }

    #[test]
    fn reprojected_ring_is_corrected() {
        let bind = GeoPoint::new(48.2, 16.37);
        // Open and clockwise.
        let ring: Ring<GeoPoint> = vec![
            GeoPoint::new(48.2001, 16.3701),
            GeoPoint::new(48.2002, 16.3701),
            GeoPoint::new(48.2002, 16.3703),
            GeoPoint::new(48.2001, 16.3703),
        ]
        .into();
        let local = geo_to_local_ring(&ring, &bind);
        assert!(local.is_closed());
        assert!(local.area() > 0.0);
    }

    #[test]
    fn reprojected_polygon_reorients_interiors() {
        let bind = GeoPoint::new(0.0, 0.0);
        let polygon = Polygon::new(
            ring![(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 40.0), (0.0, 0.0)],
            // Counter-clockwise, the wrong winding for a hole.
            vec![ring![(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0), (10.0, 10.0)]],
        );
        let geo = local_to_geo_polygon(&polygon, &bind);
        assert!(geo.interiors[0].area() < 0.0);
        assert!(geo.exterior.area() > 0.0);
    }
}
