use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::error::{GeometryError, Result};

use super::Point;

/// A circle given by its center and radius.
///
/// `r >= 0` is expected but only enforced by [`Circle::try_new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
}

impl Circle {
    /// Creates a circle without validating the radius.
    #[must_use]
    pub const fn new(center: Point, r: f64) -> Self {
        Self { center, r }
    }

    /// Creates a circle, rejecting negative or non-finite radii.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `r` is negative, NaN or
    /// infinite.
    pub fn try_new(center: Point, r: f64) -> Result<Self> {
        if !r.is_finite() || r < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: r,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self::new(center, r))
    }

    /// Enclosed area, `πr²`.
    #[must_use]
    pub fn area(self) -> f64 {
        PI * self.r * self.r
    }

    /// Perimeter length, `2πr`.
    #[must_use]
    pub fn circumference(self) -> f64 {
        TAU * self.r
    }

    /// Returns `true` if `p` lies inside or on the circle (within `eps`).
    #[must_use]
    pub fn contains(self, p: Point, eps: f64) -> bool {
        self.center.distance_to(p) <= self.r + eps
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Circle {
        Circle::new(self.center.translate(dx, dy), self.r)
    }

    /// Scales about `center`.
    ///
    /// The radius becomes `|r * s|`: a negative factor mirrors the center
    /// through `center` but never yields a negative radius.
    #[must_use]
    pub fn scale(self, s: f64, center: Point) -> Circle {
        Circle::new(self.center.scale_uniform(s, center), (self.r * s).abs())
    }

    /// Rotates the center about `center`; the radius is unchanged.
    #[must_use]
    pub fn rotate(self, angle_degrees: f64, center: Point) -> Circle {
        Circle::new(self.center.rotate(angle_degrees, center), self.r)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center={}, r={:.6})", self.center, self.r)
    }
}
