//! Resize regression test
//!
//! Identity resizes, endpoint alignment of the point kernels, exact cell
//! replication under supersampling, and the scale-factor wrapper.

use pictor_core::SizeI;
use pictor_test::{RegParams, checkerboard_gray, gradient_gray, speckle_rgb};
use pictor_transform::{Interpolation, resize, resize_by_factor};

const ALL_KERNELS: [Interpolation; 4] = [
    Interpolation::Nearest,
    Interpolation::Bilinear,
    Interpolation::Bicubic,
    Interpolation::Super,
];

#[test]
fn resize_reg() {
    let mut rp = RegParams::new("resize");

    // --- Test 1: resize to the same size is a pixelwise copy ---
    let image = speckle_rgb(13, 9, 11);
    for kernel in ALL_KERNELS {
        let out = resize(&image, image.size(), kernel).unwrap();
        rp.compare_images(&out, &image);
    }

    // --- Test 2: output corners align with input corners ---
    let image = gradient_gray(9, 9);
    for kernel in [Interpolation::Nearest, Interpolation::Bilinear, Interpolation::Bicubic] {
        let out = resize(&image, SizeI::new(17, 17), kernel).unwrap();
        rp.compare_values(
            image.get_pixel(0, 0).unwrap().l as f64,
            out.get_pixel(0, 0).unwrap().l as f64,
            0.0,
        );
        rp.compare_values(
            image.get_pixel(8, 8).unwrap().l as f64,
            out.get_pixel(16, 16).unwrap().l as f64,
            0.0,
        );
    }

    // --- Test 3: doubling a checkerboard with supersampling replicates
    // each cell into a 2x2 tile ---
    let board = checkerboard_gray(4, 4, 1);
    let doubled = resize(&board, SizeI::new(8, 8), Interpolation::Super).unwrap();
    rp.compare_images(&doubled, &checkerboard_gray(8, 8, 2));

    // --- Test 4: halving the doubled board recovers the original ---
    let halved = resize(&doubled, SizeI::new(4, 4), Interpolation::Super).unwrap();
    rp.compare_images(&halved, &board);

    // --- Test 5: scale-factor wrapper rounds the target size ---
    let image = speckle_rgb(10, 6, 5);
    let down = resize_by_factor(&image, 0.5, Interpolation::Super).unwrap();
    rp.compare_values(5.0, down.width() as f64, 0.0);
    rp.compare_values(3.0, down.height() as f64, 0.0);
    let up = resize_by_factor(&image, 2.0, Interpolation::Bicubic).unwrap();
    rp.compare_values(20.0, up.width() as f64, 0.0);
    rp.compare_values(12.0, up.height() as f64, 0.0);

    // --- Test 6: invalid targets are rejected ---
    let mut rejected = 0;
    if resize(&image, SizeI::new(0, 4), Interpolation::Nearest).is_err() {
        rejected += 1;
    }
    if resize(&image, SizeI::new(4, 0), Interpolation::Nearest).is_err() {
        rejected += 1;
    }
    if resize_by_factor(&image, 0.0, Interpolation::Nearest).is_err() {
        rejected += 1;
    }
    rp.compare_values(3.0, rejected as f64, 0.0);

    assert!(rp.cleanup(), "resize regression test failed");
}
