//! Color-space conversions
//!
//! Explicit constructors between the defined image type pairs:
//! GRAY <-> RGB and RGB <-> HMB. Pairs not implemented here (GRAY <-> HMB,
//! anything involving RGBA) have no conversion.

use super::Image;
use crate::geometry::{Vector2, fast_max, fast_min, limit, radian_to_degree};
use crate::pixel::{Gray, Hmb, PixelFormat, Rgb};

/// Hue wheel for HMB -> RGB: red, yellow, green, cyan, blue, magenta and
/// red again so a segment can always interpolate to its successor.
const HUE_WHEEL: [Rgb; 7] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 0, 0),
];

fn converted<P: PixelFormat, Q: PixelFormat>(source: &Image<P>, f: impl Fn(P) -> Q) -> Image<Q> {
    if source.is_empty() {
        return Image::empty();
    }
    let data = source.data().iter().map(|&pixel| f(pixel)).collect();
    Image::from_vec(source.width(), source.height(), data).unwrap()
}

impl Image<Rgb> {
    /// Convert to grayscale with the integer luma weights 306/601/117
    /// at the 1024 scale.
    pub fn to_gray(&self) -> Image<Gray> {
        converted(self, |rgb| {
            Gray::new(((rgb.r as i32 * 306 + rgb.g as i32 * 601 + rgb.b as i32 * 117) >> 10) as u8)
        })
    }

    /// Convert to the hue/magnitude/base model.
    ///
    /// The base is the minimum channel; the remaining chroma is projected
    /// onto the color wheel (red at 0, green at 120, blue at -120) and
    /// read back as an angle and a magnitude.
    pub fn to_hmb(&self) -> Image<Hmb> {
        let red_axis = Vector2::new(1.0, 0.0);
        let green_axis = Vector2::new(-0.5, 0.866_025);
        let blue_axis = Vector2::new(-0.5, -0.866_025);

        converted(self, |rgb| {
            let base = fast_min(rgb.r as i32, fast_min(rgb.g as i32, rgb.b as i32)) as f32;
            let r = rgb.r as f32 - base;
            let g = rgb.g as f32 - base;
            let b = rgb.b as f32 - base;
            let vec = red_axis * r + green_axis * g + blue_axis * b;

            Hmb {
                h: radian_to_degree(vec.y.atan2(vec.x)),
                m: fast_max(rgb.r as i32, fast_max(rgb.g as i32, rgb.b as i32)) as f32 - base,
                b: base,
            }
        })
    }
}

impl Image<Gray> {
    /// Convert to RGB by replicating the luma into all three channels.
    pub fn to_rgb(&self) -> Image<Rgb> {
        converted(self, |gray| Rgb::new(gray.l, gray.l, gray.l))
    }
}

impl Image<Hmb> {
    /// Convert back to RGB.
    ///
    /// The hue is rotated into positive range, interpolated on the hue
    /// wheel, scaled by the magnitude and lifted by the base.
    pub fn to_rgb(&self) -> Image<Rgb> {
        converted(self, |hmb| {
            let angle = hmb.h + 360.0 * 2.0;
            let angle_integer = (angle / 60.0) as i32;
            let alpha = (angle - angle_integer as f32 * 60.0) / 60.0;
            let index = angle_integer.rem_euclid(6) as usize;
            let f_magnitude = hmb.m / 255.0;

            let lower = HUE_WHEEL[index];
            let upper = HUE_WHEEL[index + 1];
            let r = (lower.r as f32 * (1.0 - alpha) + upper.r as f32 * alpha) * f_magnitude;
            let g = (lower.g as f32 * (1.0 - alpha) + upper.g as f32 * alpha) * f_magnitude;
            let b = (lower.b as f32 * (1.0 - alpha) + upper.b as f32 * alpha) * f_magnitude;

            Rgb {
                r: limit((r + hmb.b) as i32, 0, 255) as u8,
                g: limit((g + hmb.b) as i32, 0, 255) as u8,
                b: limit((b + hmb.b) as i32, 0, 255) as u8,
            }
        })
    }
}

impl From<&Image<Rgb>> for Image<Gray> {
    fn from(image: &Image<Rgb>) -> Self {
        image.to_gray()
    }
}

impl From<&Image<Gray>> for Image<Rgb> {
    fn from(image: &Image<Gray>) -> Self {
        image.to_rgb()
    }
}

impl From<&Image<Rgb>> for Image<Hmb> {
    fn from(image: &Image<Rgb>) -> Self {
        image.to_hmb()
    }
}

impl From<&Image<Hmb>> for Image<Rgb> {
    fn from(image: &Image<Hmb>) -> Self {
        image.to_rgb()
    }
}
