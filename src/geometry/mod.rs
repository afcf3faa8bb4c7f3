mod circle;
mod line;
mod point;
mod triangle;

pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use triangle::{Triangle, TriangleKind};

pub(crate) use triangle::sorted_sides;
