use crate::geometry::{sorted_sides, Point};
use crate::math::almost_equal;

/// Checks `a² + b² ≈ c²` on the sorted pairwise distances of three points.
///
/// Independent of [`crate::geometry::Triangle`]; the comparison is on squared
/// lengths, so `eps` is in squared units.
#[must_use]
pub fn verify_pythagorean_theorem(p1: Point, p2: Point, p3: Point, eps: f64) -> bool {
    let [a, b, c] = sorted_sides(p2.distance_to(p3), p1.distance_to(p3), p1.distance_to(p2));
    almost_equal(a * a + b * b, c * c, eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Triangle, TriangleKind};
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn right_triangle_any_order() {
        assert!(verify_pythagorean_theorem(p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0), TOLERANCE));
        assert!(verify_pythagorean_theorem(p(3.0, 4.0), p(0.0, 0.0), p(3.0, 0.0), TOLERANCE));
    }

    #[test]
    fn equilateral_is_not_right() {
        let h = 3.0_f64.sqrt();
        assert!(!verify_pythagorean_theorem(p(0.0, 0.0), p(2.0, 0.0), p(1.0, h), TOLERANCE));
    }

    #[test]
    fn agrees_with_triangle_classification() {
        let (a, b, c) = (p(1.0, 1.0), p(4.0, 5.0), p(-3.0, 4.0));
        let kind = Triangle::new(a, b, c).triangle_type(TOLERANCE);
        let right = matches!(kind, TriangleKind::Right | TriangleKind::IsoscelesRight);
        assert_eq!(verify_pythagorean_theorem(a, b, c, TOLERANCE), right);
        assert!(right);
    }

    #[test]
    fn collinear_points_are_not_right() {
        assert!(!verify_pythagorean_theorem(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), TOLERANCE));
    }

    #[test]
    fn single_point_is_trivially_right() {
        // 0 + 0 == 0
        let q = p(1.0, 1.0);
        assert!(verify_pythagorean_theorem(q, q, q, TOLERANCE));
    }
}
