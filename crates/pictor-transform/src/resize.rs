//! Image resizing
//!
//! Endpoint-aligned resampling with a choice of kernel, plus an
//! area-weighted supersampling path for downscaling. The point kernels
//! step a float source position so output corners land exactly on input
//! corners; supersampling walks the source in 10.22 fixed point and
//! averages every covered pixel by its overlap area.

use crate::{TransformError, TransformResult};
use pictor_core::pixel::{ColorAccum, PixelFormat};
use pictor_core::{Image, SizeI};

/// Resampling kernel used by [`resize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    Nearest,
    /// Bilinear interpolation at the 1024 fixed-point scale
    Bilinear,
    /// Bicubic interpolation over the shared a = -1 weight table
    Bicubic,
    /// Area-weighted supersampling (best for downscaling)
    Super,
}

/// Resize an image to an explicit target size.
///
/// Resizing to the current size returns a copy. For the point kernels the
/// source is sampled at steps of `(W-1)/(w-1)` per axis, so the output
/// corners coincide with the input corners.
///
/// # Errors
///
/// Returns [`TransformError::InvalidTargetSize`] if either target
/// dimension is < 1 and [`TransformError::EmptySource`] for an empty
/// input.
pub fn resize<P: PixelFormat>(
    image: &Image<P>,
    size: SizeI,
    interpolation: Interpolation,
) -> TransformResult<Image<P>> {
    if size.width <= 0 || size.height <= 0 {
        return Err(TransformError::InvalidTargetSize {
            width: size.width,
            height: size.height,
        });
    }
    if image.is_empty() {
        return Err(TransformError::EmptySource);
    }
    if image.size() == size {
        return Ok(image.clone());
    }

    match interpolation {
        Interpolation::Nearest => {
            Ok(resize_pointwise(image, size, |img, x, y| img.get_nearest_pixel(x, y)))
        }
        Interpolation::Bilinear => {
            Ok(resize_pointwise(image, size, |img, x, y| img.get_bilinear_pixel(x, y)))
        }
        Interpolation::Bicubic => {
            Ok(resize_pointwise(image, size, |img, x, y| img.get_bicubic_pixel(x, y)))
        }
        Interpolation::Super => Ok(resize_super(image, size)),
    }
}

/// Resize by a scale factor: the target size is `floor(dim * scaling + 0.5)`
/// per axis.
pub fn resize_by_factor<P: PixelFormat>(
    image: &Image<P>,
    scaling: f32,
    interpolation: Interpolation,
) -> TransformResult<Image<P>> {
    let size = SizeI::new(
        (image.width() as f32 * scaling + 0.5) as i32,
        (image.height() as f32 * scaling + 0.5) as i32,
    );
    resize(image, size, interpolation)
}

fn resize_pointwise<P: PixelFormat>(
    image: &Image<P>,
    size: SizeI,
    sample: impl Fn(&Image<P>, f32, f32) -> P,
) -> Image<P> {
    let x_step = (image.width() - 1) as f32 / (size.width - 1) as f32;
    let y_step = (image.height() - 1) as f32 / (size.height - 1) as f32;

    let mut output = Image::with_size(size).unwrap();
    let mut index = 0usize;
    let mut y_pos = 0.0f32;

    for _y in 0..size.height {
        let mut x_pos = 0.0f32;
        for _x in 0..size.width {
            output[index] = sample(image, x_pos, y_pos);
            index += 1;
            x_pos += x_step;
        }
        y_pos += y_step;
    }

    output
}

fn resize_super<P: PixelFormat>(image: &Image<P>, size: SizeI) -> Image<P> {
    let x_step = (image.width() as f32 / size.width as f32 * 1024.0) as i32;
    let y_step = (image.height() as f32 / size.height as f32 * 1024.0) as i32;

    let mut output = Image::with_size(size).unwrap();
    let mut index = 0usize;
    let mut y_pos = 0i32;

    for _y in 0..size.height {
        let mut x_pos = 0i32;

        for _x in 0..size.width {
            let mut color = P::Accum::default();
            let mut weight = 0i32;
            let mut y_rem = 1024 - (y_pos - (y_pos & !0x3FF));
            let mut y_area = y_step;
            let mut yy = y_pos >> 10;

            while y_area > 0 {
                let mut x_rem = 1024 - (x_pos - (x_pos & !0x3FF));

                if y_area <= 1024 {
                    y_rem = y_area;
                }
                y_area -= y_rem;

                let mut x_area = x_step;
                let mut xx = x_pos >> 10;

                while x_area > 0 {
                    if x_area <= 1024 {
                        x_rem = x_area;
                    }
                    let overlap = (x_rem * y_rem) >> 10;
                    color += P::Accum::from(image.get_pixel_unchecked(xx, yy)) * overlap;
                    weight += overlap;
                    x_area -= x_rem;
                    x_rem = 1024;
                    xx += 1;
                }

                y_rem = 1024;
                yy += 1;
            }

            // Sub-unit overlaps can round to a zero weight on extreme
            // upscales; fall back to the covered source pixel.
            output[index] = if weight > 0 {
                (color / weight).narrow()
            } else {
                image.get_pixel_unchecked(x_pos >> 10, y_pos >> 10)
            };
            index += 1;
            x_pos += x_step;
        }
        y_pos += y_step;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_core::{Gray, Rgb};

    fn ramp_gray(width: i32, height: i32) -> Image<Gray> {
        let data = (0..width * height).map(|i| Gray::new(i as u8)).collect();
        Image::from_vec(width, height, data).unwrap()
    }

    fn checkerboard_4x4() -> Image<Gray> {
        let mut image = Image::<Gray>::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let value = if (x + y) % 2 == 0 { 255 } else { 0 };
                image.set_pixel(x, y, Gray::new(value)).unwrap();
            }
        }
        image
    }

    #[test]
    fn test_same_size_is_copy() {
        let image = ramp_gray(5, 4);
        for interpolation in [
            Interpolation::Nearest,
            Interpolation::Bilinear,
            Interpolation::Bicubic,
            Interpolation::Super,
        ] {
            let out = resize(&image, image.size(), interpolation).unwrap();
            assert_eq!(out, image);
        }
    }

    #[test]
    fn test_invalid_target() {
        let image = ramp_gray(4, 4);
        assert!(resize(&image, SizeI::new(0, 4), Interpolation::Nearest).is_err());
        assert!(resize(&image, SizeI::new(4, -2), Interpolation::Nearest).is_err());
        assert!(resize(&Image::<Gray>::empty(), SizeI::new(4, 4), Interpolation::Nearest).is_err());
    }

    #[test]
    fn test_nearest_doubling_replicates_blocks() {
        let image = checkerboard_4x4();
        // (W-1)/(w-1) = 3/7 steps: positions 0, 3/7, 6/7, ... round to
        // 0 0 1 1 2 2 3 at both axes.
        let out = resize(&image, SizeI::new(8, 8), Interpolation::Nearest).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let expected = image.get_pixel(((x as f32) * 3.0 / 7.0 + 0.5) as i32,
                                               ((y as f32) * 3.0 / 7.0 + 0.5) as i32);
                assert_eq!(out.get_pixel(x, y), expected);
            }
        }
    }

    #[test]
    fn test_corners_align() {
        let image = ramp_gray(3, 3);
        for interpolation in [
            Interpolation::Nearest,
            Interpolation::Bilinear,
            Interpolation::Bicubic,
        ] {
            let out = resize(&image, SizeI::new(5, 5), interpolation).unwrap();
            assert_eq!(out.get_pixel(0, 0), image.get_pixel(0, 0));
            assert_eq!(out.get_pixel(4, 0), image.get_pixel(2, 0));
            assert_eq!(out.get_pixel(0, 4), image.get_pixel(0, 2));
            assert_eq!(out.get_pixel(4, 4), image.get_pixel(2, 2));
        }
    }

    #[test]
    fn test_super_doubling_replicates_cells() {
        let image = checkerboard_4x4();
        let out = resize(&image, SizeI::new(8, 8), Interpolation::Super).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(out.get_pixel(x, y), image.get_pixel(x / 2, y / 2));
            }
        }
    }

    #[test]
    fn test_super_halving_averages_cells() {
        let mut image = Image::<Gray>::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                image.set_pixel(x, y, Gray::new((16 * (y * 4 + x)) as u8)).unwrap();
            }
        }
        let out = resize(&image, SizeI::new(2, 2), Interpolation::Super).unwrap();
        // Each output pixel is the mean of a 2x2 block.
        let block_mean = |x0: i32, y0: i32| {
            let mut sum = 0i32;
            for y in y0..y0 + 2 {
                for x in x0..x0 + 2 {
                    sum += image.get_pixel(x, y).unwrap().l as i32;
                }
            }
            (sum / 4) as u8
        };
        assert_eq!(out.get_pixel(0, 0).unwrap().l, block_mean(0, 0));
        assert_eq!(out.get_pixel(1, 0).unwrap().l, block_mean(2, 0));
        assert_eq!(out.get_pixel(0, 1).unwrap().l, block_mean(0, 2));
        assert_eq!(out.get_pixel(1, 1).unwrap().l, block_mean(2, 2));
    }

    #[test]
    fn test_resize_by_factor_rounds_size() {
        let image = ramp_gray(10, 6);
        let out = resize_by_factor(&image, 0.5, Interpolation::Super).unwrap();
        assert_eq!(out.size(), SizeI::new(5, 3));

        let up = resize_by_factor(&image, 1.5, Interpolation::Bilinear).unwrap();
        assert_eq!(up.size(), SizeI::new(15, 9));
    }

    #[test]
    fn test_resize_rgb_channels_independent() {
        let mut image = Image::<Rgb>::new(2, 2).unwrap();
        image.fill(Rgb::new(10, 200, 90));
        let out = resize(&image, SizeI::new(4, 4), Interpolation::Bilinear).unwrap();
        assert!(out.data().iter().all(|p| *p == Rgb::new(10, 200, 90)));
    }
}
