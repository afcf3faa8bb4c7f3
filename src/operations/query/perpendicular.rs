use crate::geometry::{Line, Point};
use crate::math::distance_2d::{point_to_line_dist, project_onto_line};

use super::{intersect_lines, LineIntersection};

/// The line through `point` perpendicular to `line`.
///
/// Uses the rotated normal `(b, -a)` and solves for `c` so the result passes
/// through `point`.
#[must_use]
pub fn perpendicular_line_from_point(point: Point, line: Line) -> Line {
    let a = line.b;
    let b = -line.a;
    Line::new(a, b, -(a * point.x + b * point.y))
}

/// Foot of the perpendicular from `point` onto `line`.
///
/// Intersects `line` with its perpendicular through `point`. If that does not
/// give a single point (only possible when the normal is within `eps` of
/// zero), falls back to the closed-form projection. A line whose `a² + b²` is
/// below `eps`, or exactly zero, has no direction at all and `point` is
/// returned unchanged.
#[must_use]
pub fn find_foot_of_perpendicular(point: Point, line: Line, eps: f64) -> Point {
    let perp = perpendicular_line_from_point(point, line);
    if let LineIntersection::Point(foot) = intersect_lines(line, perp, eps) {
        return foot;
    }

    let denom = line.a * line.a + line.b * line.b;
    if denom < eps || denom <= 0.0 {
        tracing::debug!(%point, %line, "degenerate line, foot is the point itself");
        return point;
    }
    tracing::debug!(%point, %line, "perpendicular intersection failed, projecting directly");
    Point::from(project_onto_line(point.x, point.y, line.a, line.b, line.c))
}

/// Unsigned distance from `point` to `line`, or `None` if the line is
/// degenerate.
#[must_use]
pub fn distance_point_to_line(point: Point, line: Line, eps: f64) -> Option<f64> {
    if line.is_degenerate(eps) {
        return None;
    }
    Some(point_to_line_dist(point.x, point.y, line.a, line.b, line.c))
}
