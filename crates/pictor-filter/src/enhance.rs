//! Photographic correction helpers
//!
//! Dark-channel recovery after a blur and color-temperature tinting.

use crate::{FilterError, FilterResult};
use pictor_core::pixel::ColorAccum;
use pictor_core::{BlendKind, Image, Rgb, RgbAccum, alpha_blend_pixel, fast_min};

/// Re-add material detail a blur washed out.
///
/// For each pixel the difference between the original's and the blur's
/// minimum channel, scaled by `strength`, is added back to every channel
/// of the blurred pixel.
///
/// # Errors
///
/// Returns [`FilterError::InvalidStrength`] for strength outside [0, 1]
/// and [`FilterError::IncompatibleSizes`] when the images differ in size.
pub fn restore_material(
    blur_image: &Image<Rgb>,
    original_image: &Image<Rgb>,
    strength: f32,
) -> FilterResult<Image<Rgb>> {
    if !(0.0..=1.0).contains(&strength) {
        return Err(FilterError::InvalidStrength(strength));
    }
    if blur_image.size() != original_image.size() {
        return Err(FilterError::IncompatibleSizes(
            blur_image.width(),
            blur_image.height(),
            original_image.width(),
            original_image.height(),
        ));
    }

    let istrength = (strength * 1024.0) as i32;
    let mut output = blur_image.clone();

    for i in 0..output.len() {
        let blur = blur_image[i];
        let original = original_image[i];
        let blur_min = fast_min(blur.r as i32, fast_min(blur.g as i32, blur.b as i32));
        let original_min =
            fast_min(original.r as i32, fast_min(original.g as i32, original.b as i32));

        let add = ((original_min - blur_min) * istrength) >> 10;
        output[i] = (RgbAccum::from(blur) + RgbAccum::splat(add)).limit_min_max();
    }

    Ok(output)
}

/// Cool-to-warm tint endpoints; the trailing blue entry is a sentinel so
/// `index + 1` is always valid.
const TEMPERATURE_TABLE: [Rgb; 6] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 0, 255),
];

/// Tint an image toward a color temperature.
///
/// `temperature` runs from -1 (red) through 0 (white, returns a copy) to
/// 1 (blue); `strength` sets how strongly the tint is blended over the
/// image.
///
/// # Errors
///
/// Returns [`FilterError::InvalidTemperature`] for temperature outside
/// [-1, 1] and [`FilterError::InvalidStrength`] for strength outside
/// [0, 1].
pub fn correct_color_temperature(
    image: &Image<Rgb>,
    temperature: f32,
    strength: f32,
) -> FilterResult<Image<Rgb>> {
    if !(-1.0..=1.0).contains(&temperature) {
        return Err(FilterError::InvalidTemperature(temperature));
    }
    if !(0.0..=1.0).contains(&strength) {
        return Err(FilterError::InvalidStrength(strength));
    }

    if temperature == 0.0 {
        return Ok(image.clone());
    }

    let (index, alpha) = if temperature < 0.0 {
        let index = ((1.0 + temperature) / 0.5) as i32;
        let alpha = (((1.0 + temperature) - index as f32 * 0.5) / 0.5 * 1024.0) as i32;
        (index, alpha)
    } else {
        let index = (temperature / 0.5) as i32 + 2;
        let alpha = ((temperature - (index - 2) as f32 * 0.5) / 0.5 * 1024.0) as i32;
        (index, alpha)
    };

    let tint = alpha_blend_pixel(
        TEMPERATURE_TABLE[index as usize],
        TEMPERATURE_TABLE[index as usize + 1],
        alpha,
    );

    Ok(image.blend_const(tint, BlendKind::Alpha, strength))
}
