//! Subpixel sampling kernels
//!
//! Nearest, bilinear and bicubic lookups at float coordinates. Each kernel
//! has a fast variant that trusts the caller to stay inside the image and a
//! `..._safe_out_of_range` variant that clamps first.
//!
//! Bilinear weights use the 1024 fixed-point scale; bicubic weights come
//! from a table of the cubic kernel sampled on a 1/100 subpixel grid and
//! scaled by 1000.

use super::Image;
use crate::geometry::{fast_max, fast_min, limit};
use crate::pixel::{ColorAccum, PixelFormat};
use std::sync::LazyLock;

/// Number of entries in a bicubic weight table: subpixel distances
/// 0.00 to 2.00 in steps of 1/100.
pub const BICUBIC_TABLE_LEN: usize = 201;

/// Build a bicubic weight table for kernel parameter `a`.
///
/// Entry `d` holds `round(1000 * f(d / 100))` for the two-piece cubic
/// `f`; entry 200 is 0.
pub fn create_bicubic_table(a: f32) -> [i32; BICUBIC_TABLE_LEN] {
    let mut table = [0i32; BICUBIC_TABLE_LEN];

    for (d, entry) in table.iter_mut().enumerate() {
        let fd = d as f32 / 100.0;

        if d < 100 {
            *entry = (((a + 2.0) * fd * fd * fd - (a + 3.0) * fd * fd + 1.0) * 1000.0) as i32;
        } else if d < 200 {
            *entry = ((a * fd * fd * fd - 5.0 * a * fd * fd + 8.0 * a * fd - 4.0 * a) * 1000.0) as i32;
        }
    }

    table
}

static DEFAULT_BICUBIC_TABLE: LazyLock<[i32; BICUBIC_TABLE_LEN]> =
    LazyLock::new(|| create_bicubic_table(-1.0));

/// The shared weight table for the default kernel parameter a = -1.
pub fn bicubic_table() -> &'static [i32; BICUBIC_TABLE_LEN] {
    &DEFAULT_BICUBIC_TABLE
}

/// Fractional part of `x` relative to its floor, always in [0, 1).
#[inline]
fn floor_fraction(x: f32) -> (i32, f32) {
    let floor = x.floor();
    (floor as i32, x - floor)
}

impl<P: PixelFormat> Image<P> {
    /// Sample the pixel nearest to (x, y).
    ///
    /// The rounded coordinate must be inside the image.
    #[inline]
    pub fn get_nearest_pixel(&self, x: f32, y: f32) -> P {
        self.get_pixel_unchecked((x + 0.5) as i32, (y + 0.5) as i32)
    }

    /// Nearest sample with the coordinate clamped into the image.
    #[inline]
    pub fn get_nearest_pixel_safe_out_of_range(&self, x: f32, y: f32) -> P {
        self.get_pixel_unchecked(
            limit((x + 0.5) as i32, 0, self.width() - 1),
            limit((y + 0.5) as i32, 0, self.height() - 1),
        )
    }

    /// Bilinear sample at (x, y).
    ///
    /// (x, y) must lie inside the image; the +1 neighbors are clamped to
    /// the last row/column, which only ever carry zero weight there.
    pub fn get_bilinear_pixel(&self, x: f32, y: f32) -> P {
        let ix = x as i32;
        let iy = y as i32;
        let fx = ((1.0 - (x - ix as f32)) * 1024.0) as i32;
        let fy = ((1.0 - (y - iy as f32)) * 1024.0) as i32;

        self.bilinear_at(ix, iy, fx, fy)
    }

    /// Bilinear sample with clamped base coordinates.
    ///
    /// The integer base is clamped to [0, width-2] x [0, height-2]; the
    /// fractional weights keep the 1024 fixed-point scale of the fast
    /// variant, measured from the floor of the query coordinate.
    pub fn get_bilinear_pixel_safe_out_of_range(&self, x: f32, y: f32) -> P {
        let (ix, fract_x) = floor_fraction(x);
        let (iy, fract_y) = floor_fraction(y);
        let fx = ((1.0 - fract_x) * 1024.0) as i32;
        let fy = ((1.0 - fract_y) * 1024.0) as i32;
        let aix = limit(ix, 0, fast_max(self.width() - 2, 0));
        let aiy = limit(iy, 0, fast_max(self.height() - 2, 0));

        self.bilinear_at(aix, aiy, fx, fy)
    }

    fn bilinear_at(&self, ix: i32, iy: i32, fx: i32, fy: i32) -> P {
        let x1 = fast_min(ix + 1, self.width() - 1);
        let y1 = fast_min(iy + 1, self.height() - 1);

        let c1 = P::Accum::from(self.get_pixel_unchecked(ix, iy));
        let c2 = P::Accum::from(self.get_pixel_unchecked(x1, iy));
        let c3 = P::Accum::from(self.get_pixel_unchecked(ix, y1));
        let c4 = P::Accum::from(self.get_pixel_unchecked(x1, y1));

        ((((c1 * fx + c2 * (1024 - fx)) >> 10) * fy + ((c3 * fx + c4 * (1024 - fx)) >> 10) * (1024 - fy))
            >> 10)
            .narrow()
    }

    /// Bicubic sample at (x, y) with the given weight table.
    ///
    /// The 4x4 neighborhood is clamped to the image edges.
    pub fn get_bicubic_pixel_with_table(
        &self,
        x: f32,
        y: f32,
        table: &[i32; BICUBIC_TABLE_LEN],
    ) -> P {
        let ix = x as i32;
        let iy = y as i32;
        let fx100 = ((x - ix as f32) * 100.0) as i32;
        let fy100 = ((y - iy as f32) * 100.0) as i32;

        let xs = [
            fast_max(ix - 1, 0),
            ix,
            fast_min(ix + 1, self.width() - 1),
            fast_min(ix + 2, self.width() - 1),
        ];
        let ys = [
            fast_max(iy - 1, 0),
            iy,
            fast_min(iy + 1, self.height() - 1),
            fast_min(iy + 2, self.height() - 1),
        ];

        self.bicubic_at(&xs, &ys, fx100, fy100, table)
    }

    /// Bicubic sample with the default a = -1 table.
    #[inline]
    pub fn get_bicubic_pixel(&self, x: f32, y: f32) -> P {
        self.get_bicubic_pixel_with_table(x, y, bicubic_table())
    }

    /// Bicubic sample with every neighbor index clamped into the image
    /// and the subpixel index clamped to [0, 100].
    pub fn get_bicubic_pixel_safe_out_of_range_with_table(
        &self,
        x: f32,
        y: f32,
        table: &[i32; BICUBIC_TABLE_LEN],
    ) -> P {
        let (ix, fract_x) = floor_fraction(x);
        let (iy, fract_y) = floor_fraction(y);
        let fx100 = limit((fract_x * 100.0) as i32, 0, 100);
        let fy100 = limit((fract_y * 100.0) as i32, 0, 100);

        let max_x = self.width() - 1;
        let max_y = self.height() - 1;
        let xs = [
            limit(ix - 1, 0, max_x),
            limit(ix, 0, max_x),
            limit(ix + 1, 0, max_x),
            limit(ix + 2, 0, max_x),
        ];
        let ys = [
            limit(iy - 1, 0, max_y),
            limit(iy, 0, max_y),
            limit(iy + 1, 0, max_y),
            limit(iy + 2, 0, max_y),
        ];

        self.bicubic_at(&xs, &ys, fx100, fy100, table)
    }

    /// Safe bicubic sample with the default a = -1 table.
    #[inline]
    pub fn get_bicubic_pixel_safe_out_of_range(&self, x: f32, y: f32) -> P {
        self.get_bicubic_pixel_safe_out_of_range_with_table(x, y, bicubic_table())
    }

    fn bicubic_at(
        &self,
        xs: &[i32; 4],
        ys: &[i32; 4],
        fx100: i32,
        fy100: i32,
        table: &[i32; BICUBIC_TABLE_LEN],
    ) -> P {
        // Weight index per tap: distances 1+f, f, 1-f, 2-f on the 1/100 grid.
        let tx = [
            (fx100 + 100) as usize,
            fx100 as usize,
            (100 - fx100) as usize,
            (200 - fx100) as usize,
        ];
        let ty = [
            (fy100 + 100) as usize,
            fy100 as usize,
            (100 - fy100) as usize,
            (200 - fy100) as usize,
        ];

        let weight_x: i32 = tx.iter().map(|&i| table[i]).sum();
        let weight_y: i32 = ty.iter().map(|&i| table[i]).sum();

        let mut result = P::Accum::default();
        for row in 0..4 {
            let mut row_sum = P::Accum::default();
            for col in 0..4 {
                let color = P::Accum::from(self.get_pixel_unchecked(xs[col], ys[row]));
                row_sum += color * table[tx[col]];
            }
            result += (row_sum / weight_x) * table[ty[row]];
        }

        (result / weight_y).limit_min_max()
    }
}
