/// Failure modes of a single composition pass.
///
/// Every entry point reports these synchronously; no partial output survives a
/// failure and nothing is retried internally.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PatternError {
    #[error("width, height, rows and columns must all be positive")]
    InvalidDimension,

    #[error("could not prepare render surface: {0}")]
    SurfaceAcquisition(String),

    #[error("unknown pattern type: {0}")]
    UnknownPatternType(String),

    #[error("failed to persist image to {path}: {reason}")]
    Persistence { path: String, reason: String },
}
