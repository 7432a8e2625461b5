use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum task count must be at least 1")]
    ZeroMinimum,
    #[error("minimum task count {min} exceeds maximum task count {max}")]
    InvertedBounds { min: u32, max: u32 },
    #[error("invalid settings file {path}: {message}")]
    InvalidFile { path: String, message: String },
}

/// Rejection reasons for a manually entered target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetInputError {
    #[error("target must contain only decimal digits, got {0:?}")]
    NotANumber(String),
    #[error("target {0} does not fit in a task count")]
    OutOfRange(String),
}
