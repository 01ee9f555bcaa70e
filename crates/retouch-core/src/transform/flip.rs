//! Axis mirroring.

use crate::types::{ImageBuffer, CHANNELS};

/// Mirror an image across one or both axes.
///
/// Four cases:
/// - `(false, false)` is the identity (output bit-identical to input)
/// - `(true, false)` mirrors columns
/// - `(false, true)` mirrors rows
/// - `(true, true)` mirrors both, equivalent to rotating pixel
///   positions by 180 degrees
///
/// # Returns
///
/// A new `ImageBuffer` of the same dimensions.
pub fn flip(image: &ImageBuffer, horizontal: bool, vertical: bool) -> ImageBuffer {
    if !horizontal && !vertical {
        return image.clone();
    }

    let channels = CHANNELS as usize;
    let w = image.width as usize;
    let h = image.height as usize;

    let mut output = vec![0u8; image.pixels.len()];

    for y in 0..h {
        let src_y = if vertical { h - 1 - y } else { y };
        for x in 0..w {
            let src_x = if horizontal { w - 1 - x } else { x };
            let src = (src_y * w + src_x) * channels;
            let dst = (y * w + x) * channels;
            output[dst..dst + channels].copy_from_slice(&image.pixels[src..src + channels]);
        }
    }

    ImageBuffer::new(image.width, image.height, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
