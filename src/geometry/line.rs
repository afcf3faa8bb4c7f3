use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::implicit_line_intersect_2d;
use crate::math::{almost_equal, Vector2};

use super::Point;

/// An infinite line in implicit form `a*x + b*y + c = 0`.
///
/// The representation is not canonical: any nonzero multiple of `(a, b, c)`
/// describes the same line. [`Line::normalize`] picks one representative.
/// A line is well-formed iff `(a, b) != (0, 0)`; the degenerate case only
/// arises from [`Line::from_points`] with coincident points and is not
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Creates a line from its coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Line through `p1` and `p2` (determinant form).
    ///
    /// If the points coincide the result has `a = b = 0`.
    #[must_use]
    pub fn from_points(p1: Point, p2: Point) -> Self {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        Self::new(dy, -dx, dx * p1.y - dy * p1.x)
    }

    /// Line through `p1` and `p2`, rejecting points closer than `eps`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the points coincide.
    pub fn try_from_points(p1: Point, p2: Point, eps: f64) -> Result<Self> {
        if p1.distance_to(p2) < eps {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::from_points(p1, p2))
    }

    /// Coefficients as an `(a, b, c)` tuple.
    #[must_use]
    pub fn coefficients(self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Normal vector `(a, b)`.
    #[must_use]
    pub fn normal(self) -> Vector2 {
        Vector2::new(self.a, self.b)
    }

    /// A vector parallel to the line, `(-b, a)`. Not normalized.
    #[must_use]
    pub fn direction_vector(self) -> Vector2 {
        Vector2::new(-self.b, self.a)
    }

    /// Returns `true` if the normal has magnitude at most `eps`.
    ///
    /// Inclusive, so `eps = 0` still flags the zero normal.
    #[must_use]
    pub fn is_degenerate(self, eps: f64) -> bool {
        self.a.hypot(self.b) <= eps
    }

    /// Signed value of `a*x + b*y + c` at `p`.
    ///
    /// Zero on the line; the sign tells which half-plane `p` lies in.
    #[must_use]
    pub fn evaluate(self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Normals are proportional: `a1*b2 ≈ b1*a2`.
    #[must_use]
    pub fn is_parallel(self, other: Line, eps: f64) -> bool {
        almost_equal(self.a * other.b, self.b * other.a, eps)
    }

    /// Parallel and the offsets match as well.
    ///
    /// The `c` ratios are compared by cross-multiplication in both
    /// directions, so no division is needed.
    #[must_use]
    pub fn is_coincident(self, other: Line, eps: f64) -> bool {
        self.is_parallel(other, eps)
            && almost_equal(self.a * other.c, self.c * other.a, eps)
            && almost_equal(self.b * other.c, self.c * other.b, eps)
    }

    /// Unique intersection point with `other`.
    ///
    /// Returns `None` for both parallel and coincident lines; use
    /// [`crate::operations::query::intersect_lines`] to tell them apart.
    #[must_use]
    pub fn intersection_with_line(self, other: Line, eps: f64) -> Option<Point> {
        implicit_line_intersect_2d(self.coefficients(), other.coefficients(), eps)
            .map(Point::from)
    }

    /// Rescales so that `(a, b)` has unit length, with a deterministic sign
    /// (`a > 0`, or `a ≈ 0` and `b > 0`).
    ///
    /// A degenerate line (see [`Line::is_degenerate`]) is returned unchanged.
    #[must_use]
    pub fn normalize(self, eps: f64) -> Line {
        if self.is_degenerate(eps) {
            return self;
        }
        let norm = self.a.hypot(self.b);
        let (a, b, c) = (self.a / norm, self.b / norm, self.c / norm);
        if a < -eps || (almost_equal(a, 0.0, eps) && b < -eps) {
            Line::new(-a, -b, -c)
        } else {
            Line::new(a, b, c)
        }
    }

    /// Shifts the line by `(dx, dy)`.
    ///
    /// Substitutes `x -> x - dx`, `y -> y - dy`; the normal is unchanged.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Line {
        Line::new(self.a, self.b, self.c - self.a * dx - self.b * dy)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({:.6}x + {:.6}y + {:.6} = 0)", self.a, self.b, self.c)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanarError;
    use crate::math::TOLERANCE;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn from_points_passes_through_both() {
        let a = p(1.0, 2.0);
        let b = p(4.0, -3.0);
        let l = Line::from_points(a, b);
        assert_abs_diff_eq!(l.evaluate(a), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.evaluate(b), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn from_points_x_axis() {
        let l = Line::from_points(p(-6.0, 0.0), p(6.0, 0.0));
        assert_eq!(l.coefficients(), (0.0, -12.0, 0.0));
    }

    #[test]
    fn from_coincident_points_is_degenerate() {
        let l = Line::from_points(p(2.0, 2.0), p(2.0, 2.0));
        assert!(l.is_degenerate(TOLERANCE));
    }

    #[test]
    fn try_from_coincident_points_fails() {
        let r = Line::try_from_points(p(2.0, 2.0), p(2.0, 2.0), TOLERANCE);
        assert!(matches!(
            r,
            Err(PlanarError::Geometry(GeometryError::ZeroVector))
        ));
        assert!(Line::try_from_points(p(0.0, 0.0), p(1.0, 0.0), TOLERANCE).is_ok());
    }

    #[test]
    fn evaluate_sign_splits_half_planes() {
        // y = 0, written as 0x + 1y + 0 = 0
        let l = Line::new(0.0, 1.0, 0.0);
        assert!(l.evaluate(p(0.0, 1.0)) > 0.0);
        assert!(l.evaluate(p(0.0, -1.0)) < 0.0);
    }

    #[test]
    fn direction_is_orthogonal_to_normal() {
        let l = Line::new(3.0, -2.0, 7.0);
        assert_abs_diff_eq!(l.direction_vector().dot(&l.normal()), 0.0);
    }

    #[test]
    fn parallel_but_not_coincident() {
        let l1 = Line::new(1.0, 2.0, 3.0);
        let l2 = Line::new(2.0, 4.0, -1.0);
        assert!(l1.is_parallel(l2, TOLERANCE));
        assert!(!l1.is_coincident(l2, TOLERANCE));
    }

    #[test]
    fn scaled_copy_is_coincident() {
        let l1 = Line::new(1.0, 2.0, 3.0);
        let l2 = Line::new(-2.0, -4.0, -6.0);
        assert!(l1.is_coincident(l2, TOLERANCE));
    }

    #[test]
    fn vertical_lines_coincident_without_division() {
        // x = 1 in two scalings; b = 0 would break a ratio test
        let l1 = Line::new(1.0, 0.0, -1.0);
        let l2 = Line::new(5.0, 0.0, -5.0);
        assert!(l1.is_coincident(l2, TOLERANCE));
    }

    #[test]
    fn intersection_with_line_solves_system() {
        let l1 = Line::from_points(p(0.0, 0.0), p(3.0, 4.0));
        let l2 = Line::from_points(p(3.0, 0.0), p(0.0, 4.0));
        let x = l1.intersection_with_line(l2, TOLERANCE).unwrap();
        assert_abs_diff_eq!(x.x, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(x.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn intersection_with_parallel_is_none() {
        let l1 = Line::new(1.0, 1.0, 0.0);
        assert!(l1.intersection_with_line(l1.translate(1.0, 0.0), TOLERANCE).is_none());
    }

    #[test]
    fn normalize_gives_unit_normal_and_positive_a() {
        let l = Line::new(-3.0, 4.0, 10.0).normalize(TOLERANCE);
        assert_abs_diff_eq!(l.a, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(l.b, -0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(l.c, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_horizontal_gives_positive_b() {
        let l = Line::new(0.0, -2.0, 4.0).normalize(TOLERANCE);
        assert_eq!(l.coefficients(), (0.0, 1.0, -2.0));
    }

    #[test]
    fn normalize_degenerate_is_identity() {
        let l = Line::new(0.0, 0.0, 5.0);
        assert_eq!(l.normalize(TOLERANCE), l);
    }

    #[test]
    fn zero_normal_is_degenerate_at_zero_eps() {
        let l = Line::from_points(p(1.0, 1.0), p(1.0, 1.0));
        assert!(l.is_degenerate(0.0));
        assert_eq!(l.normalize(0.0), l);
        assert!(!Line::new(1e-300, 0.0, 0.0).is_degenerate(0.0));
    }

    #[test]
    fn translate_keeps_normal() {
        let l = Line::new(1.0, -1.0, 0.0).translate(2.0, 0.0);
        assert_eq!(l.normal(), Vector2::new(1.0, -1.0));
        assert_abs_diff_eq!(l.evaluate(p(2.0, 0.0)), 0.0);
        assert_abs_diff_eq!(l.evaluate(p(3.0, 1.0)), 0.0);
    }

    #[test]
    fn display_form() {
        assert_eq!(
            Line::new(1.0, -1.0, 0.5).to_string(),
            "Line(1.000000x + -1.000000y + 0.500000 = 0)"
        );
    }

    fn coef() -> impl Strategy<Value = f64> {
        -100.0..100.0f64
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(a in coef(), b in coef(), c in coef()) {
            let once = Line::new(a, b, c).normalize(TOLERANCE);
            let twice = once.normalize(TOLERANCE);
            prop_assert!((once.a - twice.a).abs() <= 1e-12);
            prop_assert!((once.b - twice.b).abs() <= 1e-12);
            prop_assert!((once.c - twice.c).abs() <= 1e-12 * once.c.abs().max(1.0));
        }

        #[test]
        fn scaled_lines_normalize_alike(
            a in coef(), b in coef(), c in coef(), k in prop_oneof![-50.0..-0.1f64, 0.1..50.0f64]
        ) {
            prop_assume!(a.hypot(b) > 1e-3);
            let l1 = Line::new(a, b, c).normalize(TOLERANCE);
            let l2 = Line::new(k * a, k * b, k * c).normalize(TOLERANCE);
            prop_assert!((l1.a - l2.a).abs() <= 1e-9);
            prop_assert!((l1.b - l2.b).abs() <= 1e-9);
            prop_assert!((l1.c - l2.c).abs() <= 1e-9);
        }

        #[test]
        fn translation_round_trip(a in coef(), b in coef(), c in coef(), dx in coef(), dy in coef()) {
            let l = Line::new(a, b, c);
            let back = l.translate(dx, dy).translate(-dx, -dy);
            prop_assert_eq!(back.a, l.a);
            prop_assert_eq!(back.b, l.b);
            prop_assert!((back.c - l.c).abs() <= 1e-9);
        }
    }
}
