use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmoothError {
    /// Polyline too short, or a count that must be positive is not.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Zero-length chord or coincident knots in a spline window.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Parameter out of range: {0}")]
    ParameterOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, SmoothError>;
