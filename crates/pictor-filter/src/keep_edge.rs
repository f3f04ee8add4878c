//! Edge-preserving Gaussian blur
//!
//! Separable Gaussian where each pass only averages neighbors whose color
//! lies within per-channel tolerances of the window center, so strong
//! edges survive the smoothing. One variant measures similarity in HMB
//! space, the other directly on RGB channels.

use crate::gaussian::{gaussian_kernel, gaussian_radius};
use crate::{FilterError, FilterResult};
use pictor_core::pixel::ColorAccum;
use pictor_core::{Hmb, Image, Rgb, RgbAccum, fast_abs};

/// Edge-preserving Gaussian with similarity tested in HMB space.
///
/// A neighbor contributes to the window only when its hue, magnitude and
/// base each differ from the center by at most the given tolerance. A
/// window whose similarity set is empty keeps the center pixel.
///
/// # Errors
///
/// Returns [`FilterError::InvalidSigma`] for negative sigma.
pub fn gaussian_keep_edge_hmb(
    image: &Image<Rgb>,
    sigma: f32,
    hue_tolerance: f32,
    magnitude_tolerance: f32,
    base_tolerance: f32,
) -> FilterResult<Image<Rgb>> {
    if sigma < 0.0 {
        return Err(FilterError::InvalidSigma(sigma));
    }

    let radius = gaussian_radius(sigma);
    if radius == 0 {
        return Ok(image.clone());
    }

    let kernel = gaussian_kernel(sigma, radius);
    let input = image.mirror_border(radius, radius)?;
    let hmb = input.to_hmb();
    let mut output = Image::with_size(image.size())?;
    let mut row_rgb = Image::<Rgb>::new(input.width(), 1)?;
    let mut out_index = 0usize;

    let within = |center: Hmb, neighbor: Hmb| {
        (center.h - neighbor.h).abs() <= hue_tolerance
            && (center.m - neighbor.m).abs() <= magnitude_tolerance
            && (center.b - neighbor.b).abs() <= base_tolerance
    };

    for y in 0..image.height() {
        // Vertical pass over every padded column.
        for x in 0..input.width() {
            let center = hmb.get_pixel_unchecked(x, y + radius);

            let mut color = RgbAccum::default();
            let mut much_weight = 0i32;
            for (i, &k) in kernel.iter().enumerate() {
                if within(center, hmb.get_pixel_unchecked(x, y + i as i32)) {
                    color += RgbAccum::from(input.get_pixel_unchecked(x, y + i as i32)) * k;
                    much_weight += k;
                }
            }

            let value = if much_weight > 0 {
                (color / much_weight).narrow()
            } else {
                input.get_pixel_unchecked(x, y + radius)
            };
            row_rgb.set_pixel_unchecked(x, 0, value);
        }

        let row_hmb = row_rgb.to_hmb();

        // Horizontal pass with the similarity re-tested on the new row.
        for x in 0..image.width() {
            let center = row_hmb.get_pixel_unchecked(x + radius, 0);

            let mut color = RgbAccum::default();
            let mut much_weight = 0i32;
            for (i, &k) in kernel.iter().enumerate() {
                if within(center, row_hmb.get_pixel_unchecked(x + i as i32, 0)) {
                    color += RgbAccum::from(row_rgb.get_pixel_unchecked(x + i as i32, 0)) * k;
                    much_weight += k;
                }
            }

            output[out_index] = if much_weight > 0 {
                (color / much_weight).narrow()
            } else {
                row_rgb.get_pixel_unchecked(x + radius, 0)
            };
            out_index += 1;
        }
    }

    Ok(output)
}

/// Edge-preserving Gaussian with similarity tested on RGB channels.
///
/// # Errors
///
/// Returns [`FilterError::InvalidSigma`] for negative sigma.
pub fn gaussian_keep_edge_rgb(
    image: &Image<Rgb>,
    sigma: f32,
    r_tolerance: u8,
    g_tolerance: u8,
    b_tolerance: u8,
) -> FilterResult<Image<Rgb>> {
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
    let mut row_rgb = Image::<Rgb>::new(input.width(), 1)?;
    let mut out_index = 0usize;

    let within = |center: Rgb, neighbor: Rgb| {
        fast_abs(center.r as i32 - neighbor.r as i32) <= r_tolerance as i32
            && fast_abs(center.g as i32 - neighbor.g as i32) <= g_tolerance as i32
            && fast_abs(center.b as i32 - neighbor.b as i32) <= b_tolerance as i32
    };

    for y in 0..image.height() {
        // Vertical pass over every padded column.
        for x in 0..input.width() {
            let center = input.get_pixel_unchecked(x, y + radius);

            let mut color = RgbAccum::default();
            let mut much_weight = 0i32;
            for (i, &k) in kernel.iter().enumerate() {
                let neighbor = input.get_pixel_unchecked(x, y + i as i32);
                if within(center, neighbor) {
                    color += RgbAccum::from(neighbor) * k;
                    much_weight += k;
                }
            }

            let value = if much_weight > 0 {
                (color / much_weight).narrow()
            } else {
                center
            };
            row_rgb.set_pixel_unchecked(x, 0, value);
        }

        // Horizontal pass.
        for x in 0..image.width() {
            let center = row_rgb.get_pixel_unchecked(x + radius, 0);

            let mut color = RgbAccum::default();
            let mut much_weight = 0i32;
            for (i, &k) in kernel.iter().enumerate() {
                let neighbor = row_rgb.get_pixel_unchecked(x + i as i32, 0);
                if within(center, neighbor) {
                    color += RgbAccum::from(neighbor) * k;
                    much_weight += k;
                }
            }

            output[out_index] = if much_weight > 0 {
                (color / much_weight).narrow()
            } else {
                center
            };
            out_index += 1;
        }
    }

    Ok(output)
}
