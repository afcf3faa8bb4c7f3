use super::almost_equal;

/// Intersection of two lines in implicit form `a*x + b*y + c = 0` (Cramer's rule).
///
/// Each line is given as its `(a, b, c)` coefficients. Returns `(x, y)` unless
/// the determinant `a1*b2 - a2*b1` is within `eps` of zero, in which case the
/// lines are parallel or coincident and there is no unique solution.
#[must_use]
pub fn implicit_line_intersect_2d(
    l1: (f64, f64, f64),
    l2: (f64, f64, f64),
    eps: f64,
) -> Option<(f64, f64)> {
    let (a1, b1, c1) = l1;
    let (a2, b2, c2) = l2;
    let det = a1 * b2 - a2 * b1;
    if almost_equal(det, 0.0, eps) {
        return None;
    }
    let x = (b1 * c2 - b2 * c1) / det;
    let y = (a2 * c1 - a1 * c2) / det;
    Some((x, y))
}

/// Radical-chord construction for two circles with distinct centers.
#[derive(Debug, Clone, Copy)]
pub struct RadicalChord {
    /// Foot of the chord on the center-to-center axis.
    pub mid: (f64, f64),
    /// Squared half-length of the chord. Negative when the circles miss.
    pub h_sq: f64,
    /// Unit vector perpendicular to the center-to-center axis.
    pub perp: (f64, f64),
}

/// Computes the radical chord of circles `(c0, r0)` and `(c1, r1)`.
///
/// With `d` the center distance, the chord sits at `a = (r0² - r1² + d²) / (2d)`
/// from `c0` along the axis and has half-length `h = sqrt(r0² - a²)`.
///
/// Returns `None` if the centers coincide (`d == 0`).
#[must_use]
pub fn radical_chord_2d(c0: (f64, f64), r0: f64, c1: (f64, f64), r1: f64) -> Option<RadicalChord> {
    let dx = c1.0 - c0.0;
    let dy = c1.1 - c0.1;
    let d = dx.hypot(dy);
    if d <= 0.0 {
        return None;
    }
    let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
    Some(RadicalChord {
        mid: (c0.0 + a * dx / d, c0.1 + a * dy / d),
        h_sq: r0 * r0 - a * a,
        perp: (-dy / d, dx / d),
    })
}
