//! Separable Gaussian blur
//!
//! The 1D kernel is sampled at pixel distance 2, stored as integers
//! normalized to a 4096 sum. The vertical pass shifts the accumulator down
//! by 6 bits into a scratch row; the horizontal pass shifts by 18, which
//! absorbs the 4096 scale of both passes.

use crate::{FilterError, FilterResult};
use pictor_core::Image;
use pictor_core::pixel::{ColorAccum, PixelFormat};

/// Distance between adjacent kernel taps in sigma units.
const PIXEL_DISTANCE_SCALE: f32 = 2.0;

/// Window radius for a given sigma. Zero means the blur is a no-op.
pub(crate) fn gaussian_radius(sigma: f32) -> i32 {
    (sigma / PIXEL_DISTANCE_SCALE * 2.0) as i32
}

/// Integer Gaussian kernel of length `2 * radius + 1` normalized so the
/// entries sum to approximately 4096.
pub(crate) fn gaussian_kernel(sigma: f32, radius: i32) -> Vec<i32> {
    let sigma = sigma as f64;
    let sigma_2_square = 2.0 * sigma * sigma;
    let root_sigma_square_pi = (2.0 * std::f64::consts::PI * sigma * sigma).sqrt();
    let len = (radius * 2 + 1) as usize;

    let mut sum = 0.0f64;
    for i in 0..len {
        let distance = (i as i32 - radius) as f64 * PIXEL_DISTANCE_SCALE as f64;
        sum += (-(distance * distance) / sigma_2_square).exp() / root_sigma_square_pi;
    }

    let weight = 4096.0 / sum;
    (0..len)
        .map(|i| {
            let distance = (i as i32 - radius) as f64 * PIXEL_DISTANCE_SCALE as f64;
            (((-(distance * distance) / sigma_2_square).exp() / root_sigma_square_pi) * weight)
                as i32
        })
        .collect()
}

/// Gaussian blur with standard deviation `sigma`.
///
/// Sigma below 1 keeps the window radius at zero and returns a copy of the
/// input.
///
/// # Errors
///
/// Returns [`FilterError::InvalidSigma`] for negative sigma.
pub fn gaussian<P: PixelFormat>(image: &Image<P>, sigma: f32) -> FilterResult<Image<P>> {
    if sigma < 0.0 {
        return Err(FilterError::InvalidSigma(sigma));
    }

    let radius = gaussian_radius(sigma);
    if radius == 0 {
        return Ok(image.clone());
    }

    let kernel = gaussian_kernel(sigma, radius);
    let input = image.mirror_border(radius, radius)?;
    let mut output = Image::with_size(image.size())?;
    let mut horizontal: Vec<P::Accum> = vec![P::Accum::default(); input.width() as usize];
    let mut out_index = 0usize;

    for y in 0..image.height() {
        // Vertical pass over every padded column into the scratch row.
        for x in 0..input.width() {
            let mut color = P::Accum::default();
            for (i, &k) in kernel.iter().enumerate() {
                color += P::Accum::from(input.get_pixel_unchecked(x, y + i as i32)) * k;
            }
            horizontal[x as usize] = color >> 6;
        }

        // Horizontal pass across the scratch row.
        for x in 0..image.width() {
            let mut color = P::Accum::default();
            for (i, &k) in kernel.iter().enumerate() {
                color += horizontal[x as usize + i] * k;
            }
            output[out_index] = (color >> 18).narrow();
            out_index += 1;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_core::{Gray, Rgb};

    #[test]
    fn test_kernel_normalization() {
        for sigma in [1.0f32, 2.5, 10.0] {
            let radius = gaussian_radius(sigma);
            let kernel = gaussian_kernel(sigma, radius);
            assert_eq!(kernel.len(), (radius * 2 + 1) as usize);
            let sum: i32 = kernel.iter().sum();
            // Integer truncation loses at most one unit per tap.
            assert!(sum <= 4096 && sum > 4096 - kernel.len() as i32);
            // Symmetric around the center.
            assert_eq!(kernel[0], kernel[kernel.len() - 1]);
        }
    }

    #[test]
    fn test_sigma_below_one_is_identity() {
        let mut image = Image::<Gray>::new(5, 5).unwrap();
        image.set_pixel(2, 2, Gray::new(255)).unwrap();

        let out = gaussian(&image, 0.0).unwrap();
        assert_eq!(out, image);
        let out = gaussian(&image, 0.9).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_negative_sigma_fails() {
        let image = Image::<Gray>::new(5, 5).unwrap();
        assert!(gaussian(&image, -1.0).is_err());
    }

    #[test]
    fn test_solid_color_is_preserved() {
        let mut image = Image::<Rgb>::new(8, 8).unwrap();
        image.fill(Rgb::new(17, 170, 255));

        for sigma in [1.0f32, 3.0, 6.0] {
            let out = gaussian(&image, sigma).unwrap();
            for pixel in out.data() {
                // The 4096 normalization truncates low in both passes, so
                // each channel may lose up to two units.
                assert!((pixel.r as i32 - 17).abs() <= 2);
                assert!((pixel.g as i32 - 170).abs() <= 2);
                assert!((pixel.b as i32 - 255).abs() <= 2);
            }
        }
    }

    #[test]
    fn test_float_gray_blur() {
        use pictor_core::GrayF;

        let mut image = Image::<GrayF>::new(6, 6).unwrap();
        image.fill(GrayF::new(128.0));
        let out = gaussian(&image, 2.0).unwrap();
        for pixel in out.data() {
            assert!((pixel.l - 128.0).abs() < 1.5);
        }
    }

    #[test]
    fn test_blur_spreads_impulse() {
        let mut image = Image::<Gray>::new(9, 9).unwrap();
        image.set_pixel(4, 4, Gray::new(255)).unwrap();

        let out = gaussian(&image, 2.0).unwrap();
        let center = out.get_pixel(4, 4).unwrap().l;
        let neighbor = out.get_pixel(3, 4).unwrap().l;
        let far = out.get_pixel(0, 0).unwrap().l;

        assert!(center < 255);
        assert!(neighbor > 0);
        assert!(center >= neighbor);
        assert!(neighbor >= far);
    }
}
