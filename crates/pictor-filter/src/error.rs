//! Error types for pictor-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pictor_core::Error),

    /// Negative Gaussian sigma
    #[error("invalid sigma: {0}")]
    InvalidSigma(f32),

    /// Strength outside [0, 1]
    #[error("invalid strength: {0}")]
    InvalidStrength(f32),

    /// Temperature outside [-1, 1]
    #[error("invalid temperature: {0}")]
    InvalidTemperature(f32),

    /// Window radius below 1
    #[error("invalid radius: {0}")]
    InvalidRadius(i32),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Incompatible image sizes
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(i32, i32, i32, i32),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
