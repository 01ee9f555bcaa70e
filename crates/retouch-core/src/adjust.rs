//! Pixelwise tonal adjustments.
//!
//! Each function maps every sample independently and saturates into
//! [0, 255]; none of them looks at neighboring pixels.

use crate::luminance::luminance_u8;
use crate::types::ImageBuffer;

/// Adjust brightness and contrast.
///
/// Each sample becomes `round(contrast * value + brightness)`,
/// saturating-clamped to [0, 255] independently per channel.
/// `(brightness = 0, contrast = 1.0)` is the identity.
///
/// # Arguments
///
/// * `image` - Source image
/// * `brightness` - Additive offset
/// * `contrast` - Multiplicative gain
pub fn brightness_contrast(image: &ImageBuffer, brightness: i32, contrast: f32) -> ImageBuffer {
    // Early exit if nothing changes
    if brightness == 0 && contrast == 1.0 {
        return image.clone();
    }

    let mut pixels = image.pixels.clone();
    let offset = brightness as f32;
    for v in pixels.iter_mut() {
        *v = (contrast * *v as f32 + offset).round().clamp(0.0, 255.0) as u8;
    }

    ImageBuffer::new(image.width, image.height, pixels)
}

/// Adjust color balance with a separate additive delta per channel.
///
/// Each channel is shifted by its delta and saturating-clamped to
/// [0, 255]. `(0, 0, 0)` is the identity.
pub fn color_balance(image: &ImageBuffer, red: i32, green: i32, blue: i32) -> ImageBuffer {
    if red == 0 && green == 0 && blue == 0 {
        return image.clone();
    }

    let deltas = [red, green, blue];
    let mut pixels = image.pixels.clone();
    for chunk in pixels.chunks_exact_mut(3) {
        for (v, delta) in chunk.iter_mut().zip(deltas) {
            *v = (*v as i32 + delta).clamp(0, 255) as u8;
        }
    }

    ImageBuffer::new(image.width, image.height, pixels)
}

/// Convert to grayscale while keeping three channels.
///
/// Every pixel is replaced by its BT.709 luminance replicated across
/// all channels, so the buffer shape is unchanged.
pub fn grayscale(image: &ImageBuffer) -> ImageBuffer {
    let mut pixels = image.pixels.clone();
    for chunk in pixels.chunks_exact_mut(3) {
        let lum = luminance_u8(chunk[0], chunk[1], chunk[2]);
        chunk.fill(lum);
    }

    ImageBuffer::new(image.width, image.height, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=32, 1u32..=32)
    }

    fn image_strategy() -> impl Strategy<Value = ImageBuffer> {
        dimensions_strategy().prop_flat_map(|(width, height)| {
            let size = (width * height * 3) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |pixels| ImageBuffer::new(width, height, pixels))
        })
    }

    proptest! {
        /// Property: The identity parameters change nothing, for any image.
        #[test]
        fn prop_identity_parameters(
            (width, height) in dimensions_strategy(),
            seed in any::<u8>(),
        ) {
            let size = (width * height * 3) as usize;
            let pixels: Vec<u8> = (0..size).map(|i| ((i as u32 * 31 + seed as u32) % 256) as u8).collect();
            let img = ImageBuffer::new(width, height, pixels);

            prop_assert_eq!(&brightness_contrast(&img, 0, 1.0).pixels, &img.pixels);
            prop_assert_eq!(&color_balance(&img, 0, 0, 0).pixels, &img.pixels);
        }

        /// Property: Output dimensions always match the input.
        #[test]
        fn prop_dimensions_preserved(
            (width, height) in dimensions_strategy(),
            brightness in -300i32..=300,
            contrast in 0.0f32..=3.0,
        ) {
            let img = ImageBuffer::new(width, height, vec![128; (width * height * 3) as usize]);
            let result = brightness_contrast(&img, brightness, contrast);

            prop_assert_eq!(result.width, width);
            prop_assert_eq!(result.height, height);
            prop_assert_eq!(result.pixels.len(), img.pixels.len());
        }

        /// Property: Color balance shifts every sample by exactly its
        /// channel delta, modulo saturation.
        #[test]
        fn prop_color_balance_exact_shift(
            (width, height) in dimensions_strategy(),
            red in -255i32..=255,
            green in -255i32..=255,
            blue in -255i32..=255,
        ) {
            let img = ImageBuffer::new(width, height, vec![128; (width * height * 3) as usize]);
            let result = color_balance(&img, red, green, blue);

            let expected = [
                (128 + red).clamp(0, 255) as u8,
                (128 + green).clamp(0, 255) as u8,
                (128 + blue).clamp(0, 255) as u8,
            ];
            for chunk in result.pixels.chunks_exact(3) {
                prop_assert_eq!(chunk, expected);
            }
        }

        /// Property: Grayscale output always has equal channels and is
        /// idempotent, for arbitrary pixel data.
        #[test]
        fn prop_grayscale_channels_equal(img in image_strategy()) {
            let result = grayscale(&img);
            for chunk in result.pixels.chunks_exact(3) {
                prop_assert_eq!(chunk[0], chunk[1]);
                prop_assert_eq!(chunk[1], chunk[2]);
            }

            let twice = grayscale(&result);
            prop_assert_eq!(twice.pixels, result.pixels);
        }
    }
}
