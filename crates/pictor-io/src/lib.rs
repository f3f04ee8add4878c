//! pictor-io - Image I/O
//!
//! Byte-stream, byte-buffer and file entry points for the formats the
//! workspace supports. Currently that is uncompressed BMP: 8-bit
//! grayscale with a palette and 24-bit BGR.

pub mod bmp;
mod error;

pub use bmp::{BmpPixel, read_bmp, read_bmp_bytes, read_bmp_file, write_bmp, write_bmp_file};
pub use error::{IoError, IoResult};
