//! The typed image container
//!
//! [`Image<P>`] owns a contiguous row-major buffer of one pixel format.
//! Every operator returns a fresh image; input and output buffers never
//! alias.

mod blend;
mod border;
mod convert;
mod sample;

pub use blend::{BlendKind, alpha_blend_pixel};
pub use sample::{BICUBIC_TABLE_LEN, bicubic_table, create_bicubic_table};

use crate::error::{Error, Result};
use crate::geometry::{CircleF, PointI, RectangleI, SizeI, fast_max, fast_min};
use crate::pixel::PixelFormat;

/// Owned 2D raster image
///
/// An image is either empty (0x0, length 0) or valid with
/// `length == width * height`. Pixel (x, y) lives at linear index
/// `y * width + x`.
///
/// # Examples
///
/// ```
/// use pictor_core::{Gray, Image};
///
/// let image = Image::<Gray>::new(640, 480).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.height(), 480);
/// assert_eq!(image.len(), 640 * 480);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image<P: PixelFormat> {
    width: i32,
    height: i32,
    data: Vec<P>,
}

impl<P: PixelFormat> Image<P> {
    /// Create an empty 0x0 image
    pub fn empty() -> Self {
        Image {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Create a zero-initialized image of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is < 1.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        Ok(Image {
            width,
            height,
            data: vec![P::default(); (width as usize) * (height as usize)],
        })
    }

    /// Create an image of the given size
    pub fn with_size(size: SizeI) -> Result<Self> {
        Self::new(size.width, size.height)
    }

    /// Create an image over an existing pixel buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] on non-positive dimensions and
    /// [`Error::IndexOutOfBounds`] when the buffer length does not match.
    pub fn from_vec(width: i32, height: i32, data: Vec<P>) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::IndexOutOfBounds {
                index: data.len(),
                len: expected,
            });
        }

        Ok(Image {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Image dimensions
    #[inline]
    pub fn size(&self) -> SizeI {
        SizeI::new(self.width, self.height)
    }

    /// Number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image holds no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The pixel buffer in row-major order
    #[inline]
    pub fn data(&self) -> &[P] {
        &self.data
    }

    /// Mutable access to the pixel buffer
    #[inline]
    pub fn data_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Get a pixel, or `None` when (x, y) is out of bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<P> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel without bounds checking against width/height.
    ///
    /// The caller must ensure `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: i32, y: i32) -> P {
        debug_assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        self.data[(y * self.width + x) as usize]
    }

    /// Set a pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when (x, y) is outside the image.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: P) -> Result<()> {
        if x < 0 || x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x.max(0) as usize,
                len: self.width as usize,
            });
        }
        if y < 0 || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y.max(0) as usize,
                len: self.height as usize,
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Set a pixel without bounds checking against width/height.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: i32, y: i32, value: P) {
        debug_assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        let width = self.width;
        self.data[(y * width + x) as usize] = value;
    }

    /// Overwrite every pixel
    pub fn fill(&mut self, color: P) {
        self.data.fill(color);
    }

    /// Fill the part of `rectangle` that intersects the image
    pub fn fill_rect(&mut self, color: P, rectangle: RectangleI) {
        let begin_x = fast_max(rectangle.x, 0);
        let end_x = fast_min(rectangle.x + rectangle.width, self.width);
        let begin_y = fast_max(rectangle.y, 0);
        let end_y = fast_min(rectangle.y + rectangle.height, self.height);

        for y in begin_y..end_y {
            for x in begin_x..end_x {
                self.set_pixel_unchecked(x, y, color);
            }
        }
    }

    /// Fill the disc bounded by `circle`, clipped to the image
    pub fn fill_circle(&mut self, color: P, circle: CircleF) {
        let begin_x = fast_max((circle.x - circle.radius - 1.0) as i32, 0);
        let end_x = fast_min((circle.x + circle.radius + 1.0) as i32, self.width);
        let begin_y = fast_max((circle.y - circle.radius - 1.0) as i32, 0);
        let end_y = fast_min((circle.y + circle.radius + 1.0) as i32, self.height);
        let radius_square = circle.radius * circle.radius;

        for y in begin_y..end_y {
            let sub_y = y as f32 - circle.y;
            let square_y = sub_y * sub_y;

            for x in begin_x..end_x {
                let sub_x = x as f32 - circle.x;

                if sub_x * sub_x + square_y <= radius_square {
                    self.set_pixel_unchecked(x, y, color);
                }
            }
        }
    }

    /// Copy out a rectangular region
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] unless `rectangle` lies fully
    /// inside the image with positive extent.
    pub fn trimming(&self, rectangle: RectangleI) -> Result<Image<P>> {
        if rectangle.x < 0
            || rectangle.y < 0
            || rectangle.width <= 0
            || rectangle.height <= 0
            || rectangle.x + rectangle.width > self.width
            || rectangle.y + rectangle.height > self.height
        {
            return Err(Error::RegionOutOfBounds {
                x: rectangle.x,
                y: rectangle.y,
                width: rectangle.width,
                height: rectangle.height,
            });
        }

        let mut output = Image::new(rectangle.width, rectangle.height)?;
        for y in 0..rectangle.height {
            let src_start = ((rectangle.y + y) * self.width + rectangle.x) as usize;
            let src = &self.data[src_start..src_start + rectangle.width as usize];
            let dst_start = (y * rectangle.width) as usize;
            output.data[dst_start..dst_start + rectangle.width as usize].copy_from_slice(src);
        }
        Ok(output)
    }
}

impl<P: PixelFormat> Default for Image<P> {
    fn default() -> Self {
        Image::empty()
    }
}

impl<P: PixelFormat> std::ops::Index<usize> for Image<P> {
    type Output = P;

    #[inline]
    fn index(&self, index: usize) -> &P {
        &self.data[index]
    }
}

impl<P: PixelFormat> std::ops::IndexMut<usize> for Image<P> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut P {
        &mut self.data[index]
    }
}

impl<P: PixelFormat> std::ops::Index<PointI> for Image<P> {
    type Output = P;

    #[inline]
    fn index(&self, point: PointI) -> &P {
        debug_assert!(point.x >= 0 && point.x < self.width);
        &self.data[(point.y * self.width + point.x) as usize]
    }
}

impl<P: PixelFormat> std::ops::IndexMut<PointI> for Image<P> {
    #[inline]
    fn index_mut(&mut self, point: PointI) -> &mut P {
        debug_assert!(point.x >= 0 && point.x < self.width);
        &mut self.data[(point.y * self.width + point.x) as usize]
    }
}
