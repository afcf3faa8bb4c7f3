/// Returns the unsigned distance from point `(px, py)` to the line
/// `a*x + b*y + c = 0`.
///
/// The caller must ensure `(a, b)` is not the zero vector.
#[must_use]
pub fn point_to_line_dist(px: f64, py: f64, a: f64, b: f64, c: f64) -> f64 {
    (a * px + b * py + c).abs() / a.hypot(b)
}

/// Orthogonal projection of `(px, py)` onto the line `a*x + b*y + c = 0`.
///
/// Closed form with denominator `a² + b²`; the caller must ensure it is
/// non-zero.
#[must_use]
pub fn project_onto_line(px: f64, py: f64, a: f64, b: f64, c: f64) -> (f64, f64) {
    let denom = a * a + b * b;
    let x = (b * (b * px - a * py) - a * c) / denom;
    let y = (a * (-b * px + a * py) - b * c) / denom;
    (x, y)
}
