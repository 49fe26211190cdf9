/// Signed area of rings, polygons and multi-polygons.
pub mod area;
pub use area::Area;

/// Boolean set operations via the planar overlay graph.
pub mod bool_ops;
pub use bool_ops::{BooleanOps, OpType, OverlayError};

/// Axis-aligned bounds.
pub mod bounding_rect;
pub use bounding_rect::BoundingRect;

/// Minkowski buffering by iterated union of edge capsules.
pub mod buffer;
pub use buffer::Buffer;

/// Vertex-average centroid.
pub mod centroid;
pub use centroid::Centroid;

/// Containment of points, segments and polylines.
pub mod contains;
pub use contains::Contains;

/// Graham-scan convex hull.
pub mod convex_hull;
pub use convex_hull::convex_hull;

/// Ring closure and orientation invariants, canonical form.
pub mod correct;
pub use correct::{CanonicalSort, Correct};

/// Uniform boundary traversal across the polygonal shapes.
pub mod edges_iter;
pub use edges_iter::{BoundaryEdge, Edges, EdgesIter};

/// Structural vertex counts.
pub mod num_points;
pub use num_points::NumPoints;

/// Winding-parity point location.
pub mod point_index;
pub use point_index::PointIndex;

/// Segment-segment intersection with endpoint-exact snapping.
pub mod segment_intersection;
pub use segment_intersection::{
    segment_intersection, Contact, SegmentIntersection, INTERSECTION_EPSILON,
};
