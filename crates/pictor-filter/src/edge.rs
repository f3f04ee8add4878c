//! Directional edge detection
//!
//! Each window sums unit vectors from the center toward every neighbor,
//! weighted by the grayscale difference. The resulting vector's angle and
//! scaled magnitude land in an HMB image: hue carries the edge direction,
//! magnitude the edge strength, base stays 0.

use crate::{FilterError, FilterResult};
use pictor_core::{Hmb, Image, Rgb, Vector2, fast_min};

/// Detect edges with a window of the given radius.
///
/// # Errors
///
/// Returns [`FilterError::InvalidRadius`] for a radius below 1.
pub fn edge_detection(image: &Image<Rgb>, radius: i32) -> FilterResult<Image<Hmb>> {
    if radius < 1 {
        return Err(FilterError::InvalidRadius(radius));
    }

    let side = radius * 2 + 1;
    let mut direction = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            let v = Vector2::new((x - radius) as f32, (y - radius) as f32);
            direction.push(if v.x == 0.0 && v.y == 0.0 {
                Vector2::new(0.0, 0.0)
            } else {
                v.normalize()
            });
        }
    }

    let input = image.to_gray().mirror_border(radius, radius)?;
    let mut output = Image::with_size(image.size())?;

    let max_distance_inverse =
        1.0 / (((2 * radius * radius) as f32).sqrt() * radius as f32);

    for y in 0..image.height() {
        for x in 0..image.width() {
            let center = input.get_pixel_unchecked(x + radius, y + radius).l as i32;

            let mut vec = Vector2::default();
            for (i, dir) in direction.iter().enumerate() {
                let dx = i as i32 % side;
                let dy = i as i32 / side;
                let target = input.get_pixel_unchecked(x + dx, y + dy).l as i32;
                vec += *dir * (center - target) as f32;
            }

            output.set_pixel_unchecked(
                x,
                y,
                Hmb {
                    h: vec.angle(),
                    m: fast_min((vec.magnitude() * max_distance_inverse) as i32, 255) as f32,
                    b: 0.0,
                },
            );
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_validation() {
        let image = Image::<Rgb>::new(4, 4).unwrap();
        assert!(edge_detection(&image, 0).is_err());
        assert!(edge_detection(&image, -2).is_err());
        assert!(edge_detection(&image, 1).is_ok());
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let mut image = Image::<Rgb>::new(6, 6).unwrap();
        image.fill(Rgb::new(80, 80, 80));

        let out = edge_detection(&image, 2).unwrap();
        for pixel in out.data() {
            assert_eq!(pixel.m, 0.0);
            assert_eq!(pixel.b, 0.0);
        }
    }

    #[test]
    fn test_vertical_step_points_horizontally() {
        // Dark left half, bright right half: the gradient vector at the
        // boundary points along the x axis.
        let mut image = Image::<Rgb>::new(8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 0 } else { 200 };
                image.set_pixel(x, y, Rgb::new(v, v, v)).unwrap();
            }
        }

        let out = edge_detection(&image, 1).unwrap();
        // Just left of the step the center is darker than the right
        // neighbors, so center - target is negative toward +x: the sum
        // points to -x... and on the bright side toward +x. Either way the
        // angle is horizontal and the magnitude nonzero.
        let edge = out.get_pixel(3, 4).unwrap();
        assert!(edge.m > 0.0);
        let angle = edge.h.abs();
        assert!(angle < 1.0 || (angle - 180.0).abs() < 1.0);

        // Far from the step there is no signal.
        let flat = out.get_pixel(0, 4).unwrap();
        assert_eq!(flat.m, 0.0);
    }

    #[test]
    fn test_magnitude_saturates_at_255() {
        // Checker of extremes produces large gradient sums per pixel.
        let mut image = Image::<Rgb>::new(6, 6).unwrap();
        for y in 0..6 {
            for x in 0..6 {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                image.set_pixel(x, y, Rgb::new(v, v, v)).unwrap();
            }
        }
        let out = edge_detection(&image, 1).unwrap();
        for pixel in out.data() {
            assert!(pixel.m <= 255.0);
        }
    }
}
