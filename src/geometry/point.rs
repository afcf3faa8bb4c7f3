use std::fmt;

use nalgebra::Rotation2;

use crate::math::{Point2, Vector2};

/// A point in the plane.
///
/// Plain value type; every transform returns a new point. Algorithms compare
/// points through [`Point::distance_to`] with a tolerance rather than `==`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`, default center for scaling and rotation.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinates as an `(x, y)` tuple.
    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean distance to `other`.
    ///
    /// Uses `hypot`, so large coordinate differences do not overflow in the
    /// squared sum.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Scales about `center` with independent factors per axis.
    #[must_use]
    pub fn scale(self, sx: f64, sy: f64, center: Point) -> Point {
        Point::new(
            center.x + sx * (self.x - center.x),
            center.y + sy * (self.y - center.y),
        )
    }

    /// Scales about `center` by the same factor on both axes.
    #[must_use]
    pub fn scale_uniform(self, s: f64, center: Point) -> Point {
        self.scale(s, s, center)
    }

    /// Rotates counter-clockwise about `center`.
    ///
    /// * `angle_degrees` - Rotation angle in degrees.
    #[must_use]
    pub fn rotate(self, angle_degrees: f64, center: Point) -> Point {
        let rot = Rotation2::new(angle_degrees.to_radians());
        let c = Point2::from(center);
        Point::from(c + rot * (Point2::from(self) - c))
    }

    /// Displacement vector from `self` to `other`.
    #[must_use]
    pub fn vector_to(self, other: Point) -> Vector2 {
        Vector2::new(other.x - self.x, other.y - self.y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:.6}, {:.6})", self.x, self.y)
    }
}
