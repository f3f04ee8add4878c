//! Photographic blend modes
//!
//! Every mode computes a foreground value `f(back, fore)` per pixel or per
//! channel, then mixes it over the backdrop with a fixed-point alpha:
//! `out = (back * (1024 - ia) + f * ia) >> 10`.
//!
//! Modes are tagged by [`BlendKind`] and registered in an operator table;
//! one driver walks the image and dispatches once per call, not per pixel.

use super::Image;
use crate::error::{Error, Result};
use crate::fixed::alpha_blend_channel;
use crate::geometry::{fast_max, fast_min};
#[cfg(feature = "corrected-light-blends")]
use crate::geometry::limit;
use crate::pixel::{ByteChannels, ColorAccum, PixelFormat};

/// Blend operator selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendKind {
    /// f = fore
    Alpha,
    /// f = min(back + fore, 255)
    Addition,
    /// f = max(back - fore, 0)
    Subtract,
    /// f = back * fore / 255
    Multiply,
    /// f = |fore - back|
    Difference,
    /// f = max(255 - (255 - back) * 255 / max(fore, 1), 0)
    ColorBurn,
    /// f = min(back, fore)
    Darken,
    /// f = max(back, fore)
    Lighten,
    /// f = max(back + fore - 255, 0)
    LinearBurn,
    /// f = back + fore - back * fore / 255
    Screen,
    /// f = min(back * 255 / max(255 - fore, 1), 255)
    ColorDodge,
    /// f = max(back + fore - 2 * back * fore / 255, 0)
    Exclusion,
    /// Multiply or screen depending on the backdrop channel
    Overlay,
    /// Exponential lightening/darkening driven by the fore channel
    SoftLight,
    /// Overlay with the roles of back and fore exchanged
    HardLight,
    /// Burn or dodge depending on the fore channel
    VividLight,
    /// Burn or dodge with linear ramps
    LinearLight,
    /// Darken or lighten depending on the fore channel
    PinLight,
}

enum BlendOp<P: PixelFormat> {
    Pixel(fn(P::Accum, P::Accum) -> P),
    Channel(fn(i32, i32) -> i32),
}

fn alpha_op<P: PixelFormat>(_back: P::Accum, fore: P::Accum) -> P {
    fore.narrow()
}

fn addition_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (back + fore).limit_max()
}

fn subtract_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (back - fore).limit_min()
}

fn multiply_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (back * fore / 255).narrow()
}

fn difference_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (fore - back).abs().narrow()
}

fn color_burn_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (P::Accum::splat(255) - (P::Accum::splat(255) - back) * 255 / fore.max_scalar(1)).limit_min()
}

fn darken_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    P::Accum::compare_min(back, fore).narrow()
}

fn lighten_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    P::Accum::compare_max(back, fore).narrow()
}

fn linear_burn_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (back + fore - P::Accum::splat(255)).limit_min()
}

fn screen_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (back + fore - back * fore / 255).narrow()
}

fn color_dodge_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (back * 255 / (P::Accum::splat(255) - fore).max_scalar(1)).limit_max()
}

fn exclusion_op<P: PixelFormat>(back: P::Accum, fore: P::Accum) -> P {
    (back + fore - back * fore * 2 / 255).limit_min()
}

fn overlay_channel(back: i32, fore: i32) -> i32 {
    if back < 128 {
        back * fore * 2 / 255
    } else {
        2 * (back + fore - back * fore / 255) - 255
    }
}

fn soft_light_channel(back: i32, fore: i32) -> i32 {
    let base = back as f32 / 255.0;
    if fore < 128 {
        (base.powf(2.0 * (1.0 - fore as f32 / 255.0)) * 255.0) as i32
    } else {
        (base.powf(2.0 * (1.0 / (2.0 * fore as f32 / 255.0))) * 255.0) as i32
    }
}

fn hard_light_channel(back: i32, fore: i32) -> i32 {
    if fore < 128 {
        back * fore * 2 / 255
    } else {
        2 * (back + fore - back * fore / 255) - 255
    }
}

#[cfg(not(feature = "corrected-light-blends"))]
fn vivid_light_channel(back: i32, fore: i32) -> i32 {
    if fore < 128 {
        if back < 255 - 2 * fore {
            0
        } else {
            (back - (255 - 2 * fore)) / (2 * fast_max(fore, 1))
        }
    } else if back < 2 * (255 - fore) {
        back / 2 * (255 - fore)
    } else {
        255
    }
}

#[cfg(feature = "corrected-light-blends")]
fn vivid_light_channel(back: i32, fore: i32) -> i32 {
    if fore < 128 {
        fast_max(255 - (255 - back) * 255 / fast_max(2 * fore, 1), 0)
    } else {
        fast_min(back * 255 / fast_max(2 * (255 - fore), 1), 255)
    }
}

#[cfg(not(feature = "corrected-light-blends"))]
fn linear_light_channel(back: i32, fore: i32) -> i32 {
    if fore < 128 {
        if back < 255 - 2 * fore {
            0
        } else {
            fast_min(2 * fore + back + 255, 255)
        }
    } else if back < 2 * (255 - fore) {
        fast_min(2 * fore + back + 255, 255)
    } else {
        255
    }
}

#[cfg(feature = "corrected-light-blends")]
fn linear_light_channel(back: i32, fore: i32) -> i32 {
    limit(back + 2 * fore - 255, 0, 255)
}

fn pin_light_channel(back: i32, fore: i32) -> i32 {
    if fore < 128 {
        if back < 255 - 2 * fore { back } else { 2 * fore }
    } else if back < 2 * fore - 255 {
        2 * fore - 255
    } else {
        back
    }
}

impl BlendKind {
    fn op<P: ByteChannels>(self) -> BlendOp<P> {
        match self {
            BlendKind::Alpha => BlendOp::Pixel(alpha_op::<P>),
            BlendKind::Addition => BlendOp::Pixel(addition_op::<P>),
            BlendKind::Subtract => BlendOp::Pixel(subtract_op::<P>),
            BlendKind::Multiply => BlendOp::Pixel(multiply_op::<P>),
            BlendKind::Difference => BlendOp::Pixel(difference_op::<P>),
            BlendKind::ColorBurn => BlendOp::Pixel(color_burn_op::<P>),
            BlendKind::Darken => BlendOp::Pixel(darken_op::<P>),
            BlendKind::Lighten => BlendOp::Pixel(lighten_op::<P>),
            BlendKind::LinearBurn => BlendOp::Pixel(linear_burn_op::<P>),
            BlendKind::Screen => BlendOp::Pixel(screen_op::<P>),
            BlendKind::ColorDodge => BlendOp::Pixel(color_dodge_op::<P>),
            BlendKind::Exclusion => BlendOp::Pixel(exclusion_op::<P>),
            BlendKind::Overlay => BlendOp::Channel(overlay_channel),
            BlendKind::SoftLight => BlendOp::Channel(soft_light_channel),
            BlendKind::HardLight => BlendOp::Channel(hard_light_channel),
            BlendKind::VividLight => BlendOp::Channel(vivid_light_channel),
            BlendKind::LinearLight => BlendOp::Channel(linear_light_channel),
            BlendKind::PinLight => BlendOp::Channel(pin_light_channel),
        }
    }
}

/// Blend two pixels with a fixed-point alpha in [0, 1024].
pub fn alpha_blend_pixel<P: ByteChannels>(back: P, fore: P, fixed_alpha: i32) -> P {
    let mut out = back;
    for c in 0..P::CHANNELS {
        out.set_channel(c, alpha_blend_channel(back.channel(c), fore.channel(c), fixed_alpha));
    }
    out
}

impl<P: ByteChannels> Image<P> {
    /// Blend a foreground image over this one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] when the images differ in size.
    pub fn blend(&self, fore: &Image<P>, kind: BlendKind, alpha: f32) -> Result<Image<P>> {
        if self.size() != fore.size() {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                fore.width(),
                fore.height(),
            ));
        }

        Ok(self.blend_with(kind, alpha, |i| fore[i]))
    }

    /// Blend a constant color over every pixel.
    pub fn blend_const(&self, color: P, kind: BlendKind, alpha: f32) -> Image<P> {
        self.blend_with(kind, alpha, |_| color)
    }

    fn blend_with(&self, kind: BlendKind, alpha: f32, fore_at: impl Fn(usize) -> P) -> Image<P> {
        let ialpha = (alpha * 1024.0) as i32;
        let mut output = self.clone();

        match kind.op::<P>() {
            BlendOp::Pixel(op) => {
                for i in 0..self.len() {
                    let back = self[i];
                    let result = op(P::Accum::from(back), P::Accum::from(fore_at(i)));
                    output[i] = alpha_blend_pixel(back, result, ialpha);
                }
            }
            BlendOp::Channel(op) => {
                for i in 0..self.len() {
                    let back = self[i];
                    let fore = fore_at(i);
                    let mut out = back;
                    for c in 0..P::CHANNELS {
                        let value = op(back.channel(c) as i32, fore.channel(c) as i32);
                        out.set_channel(
                            c,
                            alpha_blend_channel(back.channel(c), value as u8, ialpha),
                        );
                    }
                    output[i] = out;
                }
            }
        }

        output
    }
}
