//! Convolution with arbitrary square kernels
//!
//! Kernel weights are converted to integers at the 1024 scale; the window
//! sum runs in an accumulator over a mirror-padded copy and one shift
//! recovers pixel range.

use crate::{FilterError, FilterResult};
use pictor_core::Image;
use pictor_core::pixel::{ColorAccum, PixelFormat};

/// Convolve with a square kernel of odd side length.
///
/// `kernel` is given in row-major order with `side * side` entries; the
/// border is handled by mirror padding.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] unless the kernel length is an
/// odd perfect square.
pub fn filter<P: PixelFormat>(image: &Image<P>, kernel: &[f32]) -> FilterResult<Image<P>> {
    let side = (kernel.len() as f64).sqrt() as usize;
    if side * side != kernel.len() || side % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel length {} is not an odd square",
            kernel.len()
        )));
    }
    let radius = (side / 2) as i32;

    if image.is_empty() {
        return Ok(image.clone());
    }

    let ikernel: Vec<i32> = kernel.iter().map(|k| (k * 1024.0) as i32).collect();
    let temp = image.mirror_border(radius, radius)?;
    let mut output = Image::with_size(image.size())?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let mut color = P::Accum::default();
            for i in 0..side as i32 {
                let tx = x + i;
                for j in 0..side as i32 {
                    let ty = y + j;
                    color += P::Accum::from(temp.get_pixel_unchecked(tx, ty))
                        * ikernel[(i * side as i32 + j) as usize];
                }
            }
            output.set_pixel_unchecked(x, y, (color >> 10).limit_min_max());
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_core::{Gray, Rgb};

    fn ramp(width: i32, height: i32) -> Image<Gray> {
        let data = (0..width * height).map(|i| Gray::new((i * 3) as u8)).collect();
        Image::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn test_identity_kernel() {
        let image = ramp(5, 4);
        let kernel = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        let out = filter(&image, &kernel).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_kernel_validation() {
        let image = ramp(4, 4);
        assert!(filter(&image, &[1.0; 4]).is_err());
        assert!(filter(&image, &[1.0; 6]).is_err());
        assert!(filter(&image, &[]).is_err());
        assert!(filter(&image, &[1.0]).is_ok());
    }

    #[test]
    fn test_box_average() {
        let mut image = Image::<Gray>::new(3, 3).unwrap();
        image.set_pixel(1, 1, Gray::new(90)).unwrap();
        let kernel = [1.0 / 9.0; 9];
        let out = filter(&image, &kernel).unwrap();
        // The center window sees the impulse once: 90 * floor(1024/9) >> 10.
        assert_eq!(out.get_pixel(1, 1).unwrap().l as i32, (90 * 113) >> 10);
    }

    #[test]
    fn test_negative_weights_clamp_at_zero() {
        let mut image = Image::<Rgb>::new(3, 3).unwrap();
        image.fill(Rgb::new(10, 10, 10));
        let mut kernel = [0.0f32; 9];
        kernel[4] = -1.0;
        let out = filter(&image, &kernel).unwrap();
        assert!(out.data().iter().all(|p| *p == Rgb::new(0, 0, 0)));
    }
}
