use std::fmt;

use crate::geometry::{Circle, Line, Point};
use crate::math::distance_2d::point_to_line_dist;
use crate::math::intersect_2d::radical_chord_2d;
use crate::math::almost_equal;

use super::find_foot_of_perpendicular;

/// Outcome of [`intersect_lines`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The lines cross at exactly one point.
    Point(Point),
    /// Distinct parallel lines.
    Parallel,
    /// The same line, possibly with scaled coefficients.
    Coincident,
}

impl LineIntersection {
    /// Status word: `"point"`, `"parallel"` or `"coincident"`.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            LineIntersection::Point(_) => "point",
            LineIntersection::Parallel => "parallel",
            LineIntersection::Coincident => "coincident",
        }
    }

    /// The crossing point, if there is exactly one.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match *self {
            LineIntersection::Point(p) => Some(p),
            LineIntersection::Parallel | LineIntersection::Coincident => None,
        }
    }
}

/// Outcome of [`intersect_circles`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection {
    /// Too far apart, or one strictly inside the other.
    Disjoint,
    /// Tangent, internally or externally.
    One(Point),
    Two(Point, Point),
    /// Same center and radius: infinitely many common points.
    Coincident,
}

impl CircleIntersection {
    /// Status word: `"none"`, `"one"`, `"two"` or `"coincident"`.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            CircleIntersection::Disjoint => "none",
            CircleIntersection::One(_) => "one",
            CircleIntersection::Two(..) => "two",
            CircleIntersection::Coincident => "coincident",
        }
    }

    /// Discrete intersection points; empty for `Disjoint` and `Coincident`.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match *self {
            CircleIntersection::One(p) => vec![p],
            CircleIntersection::Two(p, q) => vec![p, q],
            CircleIntersection::Disjoint | CircleIntersection::Coincident => Vec::new(),
        }
    }
}

/// Outcome of [`intersect_line_circle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCircleIntersection {
    /// The line misses the circle, or is degenerate.
    Disjoint,
    /// Tangent line.
    One(Point),
    Two(Point, Point),
}

impl LineCircleIntersection {
    /// Status word: `"none"`, `"one"` or `"two"`.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            LineCircleIntersection::Disjoint => "none",
            LineCircleIntersection::One(_) => "one",
            LineCircleIntersection::Two(..) => "two",
        }
    }

    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match *self {
            LineCircleIntersection::One(p) => vec![p],
            LineCircleIntersection::Two(p, q) => vec![p, q],
            LineCircleIntersection::Disjoint => Vec::new(),
        }
    }
}

impl fmt::Display for LineIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineIntersection::Point(p) => write!(f, "point {p}"),
            _ => f.write_str(self.status()),
        }
    }
}

impl fmt::Display for CircleIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_status_and_points(f, self.status(), &self.points())
    }
}

impl fmt::Display for LineCircleIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_status_and_points(f, self.status(), &self.points())
    }
}

fn write_status_and_points(f: &mut fmt::Formatter<'_>, status: &str, points: &[Point]) -> fmt::Result {
    f.write_str(status)?;
    if points.is_empty() {
        return Ok(());
    }
    f.write_str(" [")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{p}")?;
    }
    f.write_str("]")
}

/// Intersects two lines.
///
/// Coincidence is checked before parallelism, so scaled copies of the same
/// line report `Coincident` rather than `Parallel`.
#[must_use]
pub fn intersect_lines(l1: Line, l2: Line, eps: f64) -> LineIntersection {
    if l1.is_coincident(l2, eps) {
        return LineIntersection::Coincident;
    }
    if l1.is_parallel(l2, eps) {
        return LineIntersection::Parallel;
    }
    // The determinant test inside `intersection_with_line` is the same
    // predicate as `is_parallel`, so `None` cannot occur here.
    l1.intersection_with_line(l2, eps)
        .map_or(LineIntersection::Parallel, LineIntersection::Point)
}

/// Intersects two circles.
///
/// Tangency is detected on the chord half-length `h`; `h²` is clamped at zero
/// before the square root so near-tangent inputs do not produce NaN.
#[must_use]
pub fn intersect_circles(c1: Circle, c2: Circle, eps: f64) -> CircleIntersection {
    let (r0, r1) = (c1.r, c2.r);
    let d = c1.center.distance_to(c2.center);

    if almost_equal(d, 0.0, eps) && almost_equal(r0, r1, eps) {
        return CircleIntersection::Coincident;
    }
    if d > r0 + r1 + eps || d < (r0 - r1).abs() - eps {
        return CircleIntersection::Disjoint;
    }

    let Some(chord) = radical_chord_2d(c1.center.as_tuple(), r0, c2.center.as_tuple(), r1) else {
        tracing::debug!(%c1, %c2, "concentric circles with unequal radii");
        return CircleIntersection::Disjoint;
    };
    if chord.h_sq < -eps {
        return CircleIntersection::Disjoint;
    }
    let h = chord.h_sq.max(0.0).sqrt();
    let mid = Point::from(chord.mid);

    if almost_equal(h, 0.0, eps) {
        return CircleIntersection::One(mid);
    }
    let (ox, oy) = (chord.perp.0 * h, chord.perp.1 * h);
    CircleIntersection::Two(mid.translate(ox, oy), mid.translate(-ox, -oy))
}

/// Intersects an infinite line with a circle.
///
/// A degenerate line (normal shorter than `eps`) yields `Disjoint`.
#[must_use]
pub fn intersect_line_circle(line: Line, circle: Circle, eps: f64) -> LineCircleIntersection {
    if line.is_degenerate(eps) {
        tracing::debug!(%line, "degenerate line has no circle intersection");
        return LineCircleIntersection::Disjoint;
    }
    let center = circle.center;
    let dist = point_to_line_dist(center.x, center.y, line.a, line.b, line.c);
    if dist > circle.r + eps {
        return LineCircleIntersection::Disjoint;
    }

    let foot = find_foot_of_perpendicular(center, line, eps);
    if almost_equal(dist, circle.r, eps) {
        return LineCircleIntersection::One(foot);
    }

    let u = line.direction_vector().normalize();
    let t = (circle.r * circle.r - dist * dist).max(0.0).sqrt();
    LineCircleIntersection::Two(
        foot.translate(u.x * t, u.y * t),
        foot.translate(-u.x * t, -u.y * t),
    )
}
