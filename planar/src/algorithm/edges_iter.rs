use planar_types::{MultiPolygon, PlanarPoint, Polygon, Rect, Ring};

/// One oriented boundary edge together with its ring neighborhood.
///
/// `prev` is the vertex before `first` and `next` the vertex after `second`,
/// both wrapping around the containing ring, so consumers can inspect the
/// corner geometry on either side of the edge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoundaryEdge<P: PlanarPoint> {
    pub first: P,
    pub second: P,
    pub prev: P,
    pub next: P,
}

/// Uniform boundary traversal over rectangles, rings, polygons and
/// multi-polygons.
///
/// For multi-polygons the iteration concatenates the exterior and then the
/// interiors of each part, across parts in order. A rectangle iterates as its
/// CCW five-vertex boundary ring.
pub trait EdgesIter<P: PlanarPoint> {
    /// The closed boundary rings of the shape, in traversal order.
    fn boundary_rings(&self) -> Vec<Vec<P>>;

    /// Oriented boundary edges; `reverse` walks every ring backwards, turning
    /// the enclosed interior into exterior under the inside-left convention.
    fn edges(&self, reverse: bool) -> Edges<P> {
        Edges {
            rings: self.boundary_rings(),
            ring: 0,
            offset: 0,
            reverse,
        }
    }

    /// Every boundary vertex in traversal order, closing vertices included.
    fn vertices(&self) -> std::vec::IntoIter<P> {
        let mut points = Vec::new();
        for ring in self.boundary_rings() {
            points.extend(ring);
        }
        points.into_iter()
    }
}

/// Iterator returned by [`EdgesIter::edges`].
#[derive(Clone, Debug)]
pub struct Edges<P: PlanarPoint> {
    rings: Vec<Vec<P>>,
    ring: usize,
    offset: usize,
    reverse: bool,
}

impl<P: PlanarPoint> Iterator for Edges<P> {
    type Item = BoundaryEdge<P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let points = self.rings.get(self.ring)?;
            let n = points.len().saturating_sub(1);
            if self.offset >= n {
                self.ring += 1;
                self.offset = 0;
                continue;
            }

            let i = self.offset;
            self.offset += 1;

            let mut first = i;
            let mut second = i + 1;
            let mut prev = (i + n - 1) % n;
            let mut next = (i + 2) % n;
            if self.reverse {
                first = n - first;
                second = n - second;
                prev = n - prev;
                next = n - next;
            }

            return Some(BoundaryEdge {
                first: points[first],
                second: points[second],
                prev: points[prev],
                next: points[next],
            });
        }
    }
}

impl<P: PlanarPoint> EdgesIter<P> for Rect<P> {
    fn boundary_rings(&self) -> Vec<Vec<P>> {
        vec![self.boundary_points().to_vec()]
    }
}

impl<P: PlanarPoint> EdgesIter<P> for Ring<P> {
    fn boundary_rings(&self) -> Vec<Vec<P>> {
        vec![self.0.clone()]
    }
}

impl<P: PlanarPoint> EdgesIter<P> for Polygon<P> {
    fn boundary_rings(&self) -> Vec<Vec<P>> {
        self.rings().map(|ring| ring.0.clone()).collect()
    }
}

impl<P: PlanarPoint> EdgesIter<P> for MultiPolygon<P> {
    fn boundary_rings(&self) -> Vec<Vec<P>> {
        self.0
            .iter()
            .flat_map(|part| part.rings().map(|ring| ring.0.clone()))
            .collect()
    }
}
