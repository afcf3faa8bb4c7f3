//! Plane analytic geometry.
//!
//! Value types for points, implicit lines, circles and triangles
//! ([`geometry`]), free-function queries over them ([`operations::query`]),
//! and the raw numeric kernels both build on ([`math`]).
//!
//! Tolerance-dependent routines take their epsilon explicitly;
//! [`math::TOLERANCE`] is the default for unit-scale input.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PlanarError, Result};
