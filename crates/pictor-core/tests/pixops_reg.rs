//! Container operation regression test
//!
//! Pixel access, fills, trimming and mirror-border padding.

use pictor_core::{CircleF, Gray, Image, RectangleI, Rgb};
use pictor_test::{RegParams, checkerboard_gray, gradient_gray};

#[test]
fn pixops_reg() {
    let mut rp = RegParams::new("pixops");

    // --- Test 1: read-after-write across formats ---
    let mut gray = Image::<Gray>::new(9, 7).unwrap();
    let mut rgb = Image::<Rgb>::new(9, 7).unwrap();
    for y in 0..7 {
        for x in 0..9 {
            gray.set_pixel(x, y, Gray::new((x * y) as u8)).unwrap();
            rgb.set_pixel(x, y, Rgb::new(x as u8, y as u8, (x + y) as u8)).unwrap();
        }
    }
    let mut bad = 0;
    for y in 0..7 {
        for x in 0..9 {
            if gray.get_pixel(x, y) != Some(Gray::new((x * y) as u8)) {
                bad += 1;
            }
            if rgb.get_pixel(x, y) != Some(Rgb::new(x as u8, y as u8, (x + y) as u8)) {
                bad += 1;
            }
        }
    }
    rp.compare_values(0.0, bad as f64, 0.0);

    // --- Test 2: clipped rectangle fill ---
    let mut image = Image::<Gray>::new(8, 8).unwrap();
    image.fill_rect(Gray::new(50), RectangleI::new(-2, -2, 6, 6));
    let filled = image.data().iter().filter(|p| p.l == 50).count();
    rp.compare_values(16.0, filled as f64, 0.0);

    // --- Test 3: disc fill stays inside the radius ---
    let mut image = Image::<Gray>::new(11, 11).unwrap();
    image.fill_circle(Gray::new(200), CircleF::new(5.0, 5.0, 3.0));
    let mut outside = 0;
    let mut center_missing = 0;
    for y in 0..11 {
        for x in 0..11 {
            let inside = (x - 5) * (x - 5) + (y - 5) * (y - 5) <= 9;
            let set = image.get_pixel(x, y).unwrap().l == 200;
            if set && !inside {
                outside += 1;
            }
            if !set && inside {
                center_missing += 1;
            }
        }
    }
    rp.compare_values(0.0, outside as f64, 0.0);
    rp.compare_values(0.0, center_missing as f64, 0.0);

    // --- Test 4: trimming extracts the expected window ---
    let image = gradient_gray(16, 8);
    let cut = image.trimming(RectangleI::new(4, 2, 8, 4)).unwrap();
    rp.compare_values(8.0, cut.width() as f64, 0.0);
    rp.compare_values(4.0, cut.height() as f64, 0.0);
    let mut bad = 0;
    for y in 0..4 {
        for x in 0..8 {
            if cut.get_pixel(x, y) != image.get_pixel(x + 4, y + 2) {
                bad += 1;
            }
        }
    }
    rp.compare_values(0.0, bad as f64, 0.0);

    // --- Test 5: zero-radius mirror border is the identity ---
    let image = checkerboard_gray(6, 6, 2);
    let padded = image.mirror_border(0, 0).unwrap();
    rp.compare_images(&padded, &image);

    // --- Test 6: mirror border reflects across both edges ---
    let image = gradient_gray(8, 4);
    let padded = image.mirror_border(3, 2).unwrap();
    rp.compare_values(14.0, padded.width() as f64, 0.0);
    rp.compare_values(8.0, padded.height() as f64, 0.0);
    let mut bad = 0;
    for k in 1..=3 {
        // Left border column k steps out equals column k steps in.
        for y in 0..4 {
            if padded.get_pixel(3 - k, y + 2) != image.get_pixel(k, y) {
                bad += 1;
            }
        }
    }
    for y in 0..4 {
        // Interior passes through untouched.
        for x in 0..8 {
            if padded.get_pixel(x + 3, y + 2) != image.get_pixel(x, y) {
                bad += 1;
            }
        }
    }
    rp.compare_values(0.0, bad as f64, 0.0);

    assert!(rp.cleanup(), "pixops regression test failed");
}
