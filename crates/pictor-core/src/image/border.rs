//! Mirror-border padding
//!
//! Extends an image by reflecting pixels across its edges, so neighborhood
//! operators can run a full window at every original pixel.

use super::Image;
use crate::error::{Error, Result};
use crate::pixel::PixelFormat;

/// Reflect an out-of-range coordinate back into [0, n).
///
/// Negative coordinates mirror across the leading edge; coordinates past
/// the end mirror across the trailing edge, repeating the edge pixel.
/// Valid for `-n <= v <= 2n - 1`.
#[inline]
fn mirror_index(v: i32, n: i32) -> i32 {
    let a = v.abs();
    if a < n { a } else { 2 * n - 1 - a }
}

impl<P: PixelFormat> Image<P> {
    /// Pad the image by `width_radius` columns on each side and
    /// `height_radius` rows on top and bottom, filling the border with
    /// mirrored pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BorderRadiusTooLarge`] if a radius exceeds the
    /// matching image dimension, and [`Error::InvalidParameter`] for
    /// negative radii.
    pub fn mirror_border(&self, width_radius: i32, height_radius: i32) -> Result<Image<P>> {
        if width_radius < 0 || height_radius < 0 {
            return Err(Error::InvalidParameter(format!(
                "negative mirror border radius: ({}, {})",
                width_radius, height_radius
            )));
        }
        if width_radius > self.width() {
            return Err(Error::BorderRadiusTooLarge {
                radius: width_radius,
                dimension: self.width(),
            });
        }
        if height_radius > self.height() {
            return Err(Error::BorderRadiusTooLarge {
                radius: height_radius,
                dimension: self.height(),
            });
        }
        if width_radius == 0 && height_radius == 0 {
            return Ok(self.clone());
        }

        let mut output = Image::new(
            self.width() + width_radius * 2,
            self.height() + height_radius * 2,
        )?;

        for y in 0..output.height() {
            let sy = mirror_index(y - height_radius, self.height());
            for x in 0..output.width() {
                let sx = mirror_index(x - width_radius, self.width());
                output.set_pixel_unchecked(x, y, self.get_pixel_unchecked(sx, sy));
            }
        }

        Ok(output)
    }
}
