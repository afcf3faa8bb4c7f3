pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type used for interop with nalgebra.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for floating-point comparisons.
///
/// Tuned for unit-scale geometry. Coordinates in the thousands or beyond
/// need a caller-chosen epsilon scaled to the data.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if `|a - b| <= eps`.
#[must_use]
#[inline]
pub fn almost_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
