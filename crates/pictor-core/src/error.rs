//! Error types for pictor-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Pictor core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Incompatible image sizes
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(i32, i32, i32, i32),

    /// Mirror border radius larger than the image extent
    #[error("mirror border radius {radius} exceeds image dimension {dimension}")]
    BorderRadiusTooLarge { radius: i32, dimension: i32 },

    /// Region outside the image bounds
    #[error("region {x},{y} {width}x{height} outside image bounds")]
    RegionOutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pictor-core operations
pub type Result<T> = std::result::Result<T, Error>;
