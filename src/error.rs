use thiserror::Error;

/// Top-level error type for the planar geometry toolkit.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by the kernel when the input geometry is degenerate.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("lines are parallel or coincident")]
    ParallelLines,

    #[error("points are collinear")]
    CollinearPoints,

    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to point-set and polygon operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
