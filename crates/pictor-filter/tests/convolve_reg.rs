//! Convolution and Gaussian blur regression test

use pictor_core::{Gray, Image};
use pictor_filter::{filter, gaussian};
use pictor_test::{RegParams, checkerboard_gray, gradient_gray, speckle_rgb};

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    // --- Test 1: sub-unit sigma keeps the window empty and copies ---
    let image = speckle_rgb(12, 12, 21);
    for sigma in [0.0f32, 0.5, 0.99] {
        let out = gaussian(&image, sigma).unwrap();
        rp.compare_images(&out, &image);
    }

    // --- Test 2: a solid color survives any sigma ---
    let mut solid = Image::<Gray>::new(10, 10).unwrap();
    solid.fill(Gray::new(173));
    for sigma in [1.0f32, 2.0, 5.0] {
        let out = gaussian(&solid, sigma).unwrap();
        let mut worst = 0i32;
        for pixel in out.data() {
            worst = worst.max((pixel.l as i32 - 173).abs());
        }
        rp.compare_values(0.0, worst as f64, 2.0);
    }

    // --- Test 3: blurring a checkerboard pulls values toward the mean ---
    let board = checkerboard_gray(16, 16, 1);
    let out = gaussian(&board, 2.0).unwrap();
    let mut moved = true;
    for pixel in out.data() {
        if pixel.l == 0 || pixel.l == 255 {
            moved = false;
        }
    }
    rp.compare_values(1.0, if moved { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: blur dimensions match the input ---
    let image = gradient_gray(15, 7);
    let out = gaussian(&image, 3.0).unwrap();
    rp.compare_values(15.0, out.width() as f64, 0.0);
    rp.compare_values(7.0, out.height() as f64, 0.0);

    // --- Test 5: identity kernel convolution is exact ---
    let identity = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
    let out = filter(&image, &identity).unwrap();
    rp.compare_images(&out, &image);

    // --- Test 6: non-square and even kernels are rejected ---
    let mut rejected = 0;
    if filter(&image, &[1.0; 8]).is_err() {
        rejected += 1;
    }
    if filter(&image, &[0.25; 4]).is_err() {
        rejected += 1;
    }
    rp.compare_values(2.0, rejected as f64, 0.0);

    // --- Test 7: negative sigma is rejected ---
    rp.compare_values(
        1.0,
        if gaussian(&image, -2.0).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "convolve regression test failed");
}
