use thiserror::Error;

/// Top-level error type for the planar geometry crate.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by the validating constructors.
///
/// The intersection and transform routines never return these; they report
/// degenerate configurations through their result enums instead.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Three vertices spanning no more than `eps` of area.
    #[error("collinear vertices: triangle area {area:e} is within tolerance")]
    CollinearVertices { area: f64 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_error_is_transparent() {
        let err: PlanarError = GeometryError::CollinearVertices { area: 0.0 }.into();
        assert_eq!(
            err.to_string(),
            "collinear vertices: triangle area 0e0 is within tolerance"
        );
    }

    #[test]
    fn out_of_range_message_names_parameter() {
        let err = GeometryError::ParameterOutOfRange {
            parameter: "radius",
            value: -1.0,
            min: 0.0,
            max: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "parameter radius = -1 is out of range [0, inf]"
        );
    }
}
