use planar_types::{LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment};

/// Vertex-average centroid.
///
/// This is the plain average of the structural vertices (closing vertices
/// included), not the mass centroid — cheap, and sufficient for placing
/// labels and picking representative points in the intended pipelines.
///
/// # Panics
///
/// Panics when called on a geometry with no vertices; an empty geometry has
/// no meaningful centroid.
pub trait Centroid<P: PlanarPoint> {
    fn centroid(&self) -> P;
}

fn average<'a, P, I>(points: I) -> P
where
    P: PlanarPoint + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut x = 0.0;
    let mut y = 0.0;
    let mut count = 0usize;
    for point in points {
        x += point.x();
        y += point.y();
        count += 1;
    }
    assert!(count > 0, "centroid of an empty geometry");
    P::from_xy(x / count as f64, y / count as f64)
}

impl<P: PlanarPoint> Centroid<P> for Segment<P> {
    fn centroid(&self) -> P {
        self.midpoint()
    }
}

impl<P: PlanarPoint> Centroid<P> for Rect<P> {
    fn centroid(&self) -> P {
        self.center()
    }
}

impl<P: PlanarPoint> Centroid<P> for LineString<P> {
    fn centroid(&self) -> P {
        average(&self.0)
    }
}

impl<P: PlanarPoint> Centroid<P> for Ring<P> {
    fn centroid(&self) -> P {
        average(&self.0)
    }
}

impl<P: PlanarPoint> Centroid<P> for Polygon<P> {
    fn centroid(&self) -> P {
        average(self.rings().flat_map(|ring| &ring.0))
    }
}

impl<P: PlanarPoint> Centroid<P> for MultiPolygon<P> {
    fn centroid(&self) -> P {
        average(self.0.iter().flat_map(|part| part.rings()).flat_map(|ring| &ring.0))
    }
}
