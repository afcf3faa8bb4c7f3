use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{almost_equal, Point2};

use super::Point;

/// Shape classification returned by [`Triangle::triangle_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    Equilateral,
    IsoscelesRight,
    Right,
    Isosceles,
    Scalene,
}

impl TriangleKind {
    /// Lower-case label, e.g. `"isosceles right"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "equilateral",
            TriangleKind::IsoscelesRight => "isosceles right",
            TriangleKind::Right => "right",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::Scalene => "scalene",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A triangle given by three vertices.
///
/// [`Triangle::new`] accepts collinear vertices; such a triangle has zero
/// area and its classification is whatever the side lengths happen to give.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    #[must_use]
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    /// Creates a triangle, rejecting collinear vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CollinearVertices` if the area is not above `eps`.
    pub fn try_new(p1: Point, p2: Point, p3: Point, eps: f64) -> Result<Self> {
        let tri = Self::new(p1, p2, p3);
        let area = tri.area();
        if area <= eps {
            return Err(GeometryError::CollinearVertices { area }.into());
        }
        Ok(tri)
    }

    #[must_use]
    pub fn vertices(self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Side lengths `(a, b, c)`, each opposite `p1`, `p2`, `p3` respectively.
    #[must_use]
    pub fn side_lengths(self) -> (f64, f64, f64) {
        (
            self.p2.distance_to(self.p3),
            self.p1.distance_to(self.p3),
            self.p1.distance_to(self.p2),
        )
    }

    #[must_use]
    pub fn perimeter(self) -> f64 {
        let (a, b, c) = self.side_lengths();
        a + b + c
    }

    /// Shoelace area; positive when the vertices run counter-clockwise.
    #[must_use]
    pub fn signed_area(self) -> f64 {
        signed_area_2d(&self.vertices().map(Point2::from))
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.signed_area().abs()
    }

    /// Classifies the triangle by its sorted side lengths `a <= b <= c`.
    ///
    /// Precedence: equilateral, isosceles right, right, isosceles, scalene.
    /// The right-angle test is `a² + b² ≈ c²`, so the right angle is always
    /// taken to be opposite the longest side.
    #[must_use]
    pub fn triangle_type(self, eps: f64) -> TriangleKind {
        let (a, b, c) = self.side_lengths();
        let [a, b, c] = sorted_sides(a, b, c);
        let equilateral = almost_equal(a, b, eps) && almost_equal(b, c, eps);
        let isosceles =
            almost_equal(a, b, eps) || almost_equal(b, c, eps) || almost_equal(a, c, eps);
        let right = almost_equal(a * a + b * b, c * c, eps);

        if equilateral {
            TriangleKind::Equilateral
        } else if right && isosceles {
            TriangleKind::IsoscelesRight
        } else if right {
            TriangleKind::Right
        } else if isosceles {
            TriangleKind::Isosceles
        } else {
            TriangleKind::Scalene
        }
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Triangle {
        self.map(|p| p.translate(dx, dy))
    }

    #[must_use]
    pub fn scale(self, sx: f64, sy: f64, center: Point) -> Triangle {
        self.map(|p| p.scale(sx, sy, center))
    }

    #[must_use]
    pub fn scale_uniform(self, s: f64, center: Point) -> Triangle {
        self.scale(s, s, center)
    }

    #[must_use]
    pub fn rotate(self, angle_degrees: f64, center: Point) -> Triangle {
        self.map(|p| p.rotate(angle_degrees, center))
    }

    fn map(self, f: impl Fn(Point) -> Point) -> Triangle {
        Triangle::new(f(self.p1), f(self.p2), f(self.p3))
    }
}

/// Sorts three lengths ascending.
pub(crate) fn sorted_sides(a: f64, b: f64, c: f64) -> [f64; 3] {
    let mut sides = [a, b, c];
    sides.sort_by(f64::total_cmp);
    sides
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {})", self.p1, self.p2, self.p3)
    }
}
