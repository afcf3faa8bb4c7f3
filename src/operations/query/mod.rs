mod intersect;
mod perpendicular;
mod pythagorean;

pub use intersect::{
    intersect_circles, intersect_line_circle, intersect_lines, CircleIntersection,
    LineCircleIntersection, LineIntersection,
};
pub use perpendicular::{
    distance_point_to_line, find_foot_of_perpendicular, perpendicular_line_from_point,
};
pub use pythagorean::verify_pythagorean_theorem;
