//! pictor-core - Core image container and pixel arithmetic
//!
//! The foundation of the pictor image processing workspace:
//!
//! - Geometry primitives and branchless integer helpers
//! - Pixel formats (GRAY, RGB, RGBA, float GRAY, HMB) with their widened
//!   color accumulators
//! - The [`Image`] container with subpixel sampling, mirror-border
//!   padding, trimming, fills and color-space conversions
//! - The photographic blend operator family
//!
//! All integer pipelines share one convention: intermediate math runs at a
//! fixed-point scale of 1024 inside an accumulator, and a single shift or
//! divide narrows back to pixel range at the end.
//!
//! # Example
//!
//! ```
//! use pictor_core::{BlendKind, Image, Rgb};
//!
//! let mut back = Image::<Rgb>::new(64, 64).unwrap();
//! back.fill(Rgb::new(200, 100, 30));
//! let tinted = back.blend_const(Rgb::new(0, 0, 255), BlendKind::Alpha, 0.25);
//! assert_eq!(tinted.size(), back.size());
//! ```

pub mod error;
pub mod fixed;
pub mod geometry;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use fixed::{
    ALPHA_1024, FIXED_ONE, FIXED_SHIFT, alpha_blend_channel, alpha_blend_channel_f,
    alpha_blend_channel_u8,
};
pub use geometry::{
    Circle, CircleF, CircleI, Point, PointF, PointI, Rectangle, RectangleF, RectangleI, Size,
    SizeF, SizeI, Vector2, degree_to_radian, fast_abs, fast_max, fast_min, limit,
    radian_to_degree,
};
pub use image::{
    BICUBIC_TABLE_LEN, BlendKind, Image, alpha_blend_pixel, bicubic_table, create_bicubic_table,
};
pub use pixel::{
    ByteChannels, ColorAccum, Gray, GrayAccum, GrayF, GrayFAccum, Hmb, HmbAccum, PixelFormat,
    Rgb, RgbAccum, Rgba, RgbaAccum,
};
