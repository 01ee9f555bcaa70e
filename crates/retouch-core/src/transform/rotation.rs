//! Image rotation by an arbitrary angle about a chosen center.
//!
//! The rotation is a unit-scale affine warp evaluated by inverse
//! mapping: for each pixel in the output image we compute which source
//! position lands there and bilinearly interpolate its value.
//!
//! For rotation by angle θ about center (cx, cy), the inverse transform is:
//! ```text
//! src_x = (dst_x - cx) * cos(-θ) - (dst_y - cy) * sin(-θ) + cx
//! src_y = (dst_x - cx) * sin(-θ) + (dst_y - cy) * cos(-θ) + cy
//! ```
//!
//! The output buffer keeps the source dimensions. Pixels mapped from
//! outside the source bounds are filled with black, so any rotation
//! that is not a multiple of 90 degrees loses corner content and gains
//! black corners. That tradeoff is part of the operation's contract.

use crate::types::{ImageBuffer, CHANNELS};

/// Apply rotation to an image.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
/// * `center` - Rotation center in pixel coordinates; `None` uses the
///   image center
///
/// # Returns
///
/// A new `ImageBuffer` with the same dimensions as the source. Regions
/// with no source coverage are black.
pub fn rotate(image: &ImageBuffer, angle_degrees: f64, center: Option<(f64, f64)>) -> ImageBuffer {
    // Fast path: no rotation needed (including full turns)
    let angle_normalized = angle_degrees % 360.0;
    if angle_normalized.abs() < 0.001 || (angle_normalized.abs() - 360.0).abs() < 0.001 {
        return image.clone();
    }

    let (w, h) = (image.width, image.height);
    let (cx, cy) = center.unwrap_or((f64::from(w) / 2.0, f64::from(h) / 2.0));

    // Negate angle for correct visual rotation direction
    // (positive angle should rotate counter-clockwise visually)
    let angle_rad = -angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let mut output = vec![0u8; image.pixels.len()];

    for dst_y in 0..h {
        for dst_x in 0..w {
            // Translate destination point to origin at the rotation center
            let dx = f64::from(dst_x) - cx;
            let dy = f64::from(dst_y) - cy;

            // Apply inverse rotation to find source coordinates
            let src_x = dx * cos - dy * sin + cx;
            let src_y = dx * sin + dy * cos + cy;

            let pixel = sample_bilinear(image, src_x, src_y);

            let dst_idx = ((dst_y * w + dst_x) * CHANNELS) as usize;
            output[dst_idx] = pixel[0];
            output[dst_idx + 1] = pixel[1];
            output[dst_idx + 2] = pixel[2];
        }
    }

    ImageBuffer::new(w, h, output)
}

/// Get a pixel as [f64; 3] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &ImageBuffer, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * image.width as usize + px) * CHANNELS as usize;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation.
///
/// The 4 nearest pixels contribute weighted by distance. Coordinates
/// outside the source extents sample the background fill (black).
fn sample_bilinear(image: &ImageBuffer, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (i64::from(image.width), i64::from(image.height));

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return [0, 0, 0];
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================
