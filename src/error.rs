use thiserror::Error;

/// Top-level error type for the libcity geometry kernel.
#[derive(Debug, Error)]
pub enum CityError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors caused by degenerate or malformed geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("height must be non-negative, got {0}")]
    NegativeHeight(f64),
}

/// Errors raised when an operation is asked to do something its input does not allow.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("point {point} does not lie on {path}")]
    PointNotOnPath { point: String, path: String },
}

/// Convenience type alias for results using [`CityError`].
pub type Result<T> = std::result::Result<T, CityError>;
