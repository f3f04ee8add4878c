//! Pictor - Self-contained 2D raster image processing
//!
//! A typed image container plus a family of pixel-wise and neighborhood
//! operators:
//!
//! - Resampling (nearest, bilinear, bicubic, supersampling area average)
//! - Separable Gaussian blur and edge-preserving variants
//! - Color-space conversion between grayscale, RGB and the
//!   hue/magnitude/base chromatic model
//! - The photographic blend mode family
//! - Color-temperature correction, material restoration, edge detection
//! - An uncompressed BMP codec
//!
//! Operators share a fixed-point arithmetic convention (unit 1024) and a
//! widened "color accumulator" per pixel format so the integer inner
//! loops cannot overflow.
//!
//! # Example
//!
//! ```
//! use pictor::{Image, Rgb, gaussian, read_bmp_bytes, write_bmp};
//!
//! let mut image = Image::<Rgb>::new(32, 32).unwrap();
//! image.fill(Rgb::new(120, 60, 200));
//!
//! let blurred = gaussian(&image, 4.0).unwrap();
//!
//! let mut bytes = Vec::new();
//! write_bmp(&blurred, &mut bytes).unwrap();
//! let restored = read_bmp_bytes::<Rgb>(&bytes).unwrap();
//! assert_eq!(restored, blurred);
//! ```

// Re-export core types
pub use pictor_core::*;

// Geometric transforms
pub use pictor_transform::{Interpolation, TransformError, TransformResult, resize, resize_by_factor};

// Filters
pub use pictor_filter::{
    FilterError, FilterResult, correct_color_temperature, edge_detection, filter, gaussian,
    gaussian_keep_edge_hmb, gaussian_keep_edge_rgb, restore_material,
};

// Image I/O
pub use pictor_io::{
    BmpPixel, IoError, IoResult, read_bmp, read_bmp_bytes, read_bmp_file, write_bmp,
    write_bmp_file,
};
