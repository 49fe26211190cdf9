/// Creates an [`XyPoint`](crate::XyPoint) from an `x, y` pair.
///
/// ```
/// use planar_types::xy;
///
/// let p = xy!(1.0, 2.5);
/// assert_eq!(p.x, 1.0);
/// assert_eq!(p.y, 2.5);
/// ```
#[macro_export]
macro_rules! xy {
    ($x:expr, $y:expr) => {
        $crate::XyPoint { x: $x, y: $y }
    };
}

/// Creates a [`Ring`](crate::Ring) of [`XyPoint`](crate::XyPoint)s from
/// `(x, y)` pairs. The ring is taken as written — call `correct` to close
/// and orient it.
///
/// ```
/// use planar_types::ring;
///
/// let triangle = ring![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0), (0.0, 0.0)];
/// assert_eq!(triangle.points().len(), 4);
/// ```
#[macro_export]
macro_rules! ring {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        $crate::Ring(vec![$($crate::XyPoint { x: $x, y: $y }),*])
    };
}
