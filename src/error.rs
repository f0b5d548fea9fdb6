use thiserror::Error;

/// Top-level error type for coaster layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by malformed shape parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("regular polygon needs at least 3 sides, got {0}")]
    TooFewSides(usize),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by layout operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;
