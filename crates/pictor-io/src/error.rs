//! Error types for pictor-io

use thiserror::Error;

/// Errors that can occur during image I/O
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying stream error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or truncated file data
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Recognized file, unsupported variant
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Bit depth outside the supported 8/24 set
    #[error("unsupported bit depth: {0} bpp")]
    UnsupportedBitDepth(u16),

    /// File bit depth does not match the requested pixel format
    #[error("bit depth mismatch: expected {expected} bpp, found {found} bpp")]
    DepthMismatch { expected: u16, found: u16 },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pictor_core::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
