//! Error types for pictor-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pictor_core::Error),

    /// Resize target with a non-positive dimension
    #[error("invalid target size: {width}x{height}")]
    InvalidTargetSize { width: i32, height: i32 },

    /// Operation requires a non-empty source image
    #[error("source image is empty")]
    EmptySource,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
