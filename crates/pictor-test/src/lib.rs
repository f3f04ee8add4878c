//! pictor-test - Regression test harness
//!
//! Comparison bookkeeping for the `*_reg` test suites plus deterministic
//! synthetic test images, so the suites run without fixture files.
//!
//! # Usage
//!
//! ```
//! use pictor_test::{RegParams, gradient_gray};
//!
//! let mut rp = RegParams::new("example");
//! let image = gradient_gray(8, 8);
//! rp.compare_values(8.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pictor_core::{Gray, Image, Rgb};

/// Directory for regression output artifacts
pub fn regout_dir() -> std::path::PathBuf {
    std::env::temp_dir().join("pictor-regout")
}

/// Write a regression artifact for manual inspection and return its path.
pub fn write_regout(name: &str, data: &[u8]) -> TestResult<std::path::PathBuf> {
    let dir = regout_dir();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(name);
    std::fs::write(&path, data).map_err(|e| TestError::ArtifactWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Horizontal grayscale ramp: 0 on the left edge, 255 on the right.
pub fn gradient_gray(width: i32, height: i32) -> Image<Gray> {
    let mut image = Image::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let l = if width > 1 { (x * 255 / (width - 1)) as u8 } else { 0 };
            image.set_pixel(x, y, Gray::new(l)).unwrap();
        }
    }
    image
}

/// RGB test card: red ramps with x, green with y, blue with the diagonal.
pub fn gradient_rgb(width: i32, height: i32) -> Image<Rgb> {
    let mut image = Image::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let r = if width > 1 { (x * 255 / (width - 1)) as u8 } else { 0 };
            let g = if height > 1 { (y * 255 / (height - 1)) as u8 } else { 0 };
            let b = ((x + y) * 255 / (width + height - 2).max(1)) as u8;
            image.set_pixel(x, y, Rgb::new(r, g, b)).unwrap();
        }
    }
    image
}

/// Grayscale checkerboard with square cells of `cell` pixels.
pub fn checkerboard_gray(width: i32, height: i32, cell: i32) -> Image<Gray> {
    let mut image = Image::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let value = if ((x / cell) + (y / cell)) % 2 == 0 { 255 } else { 0 };
            image.set_pixel(x, y, Gray::new(value)).unwrap();
        }
    }
    image
}

/// Deterministic pseudo-random RGB image seeded by a linear congruence.
pub fn speckle_rgb(width: i32, height: i32, seed: u32) -> Image<Rgb> {
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);
    let mut next = move || {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        (state >> 24) as u8
    };

    let mut image = Image::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let pixel = Rgb::new(next(), next(), next());
            image.set_pixel(x, y, pixel).unwrap();
        }
    }
    image
}
