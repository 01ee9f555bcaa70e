//! Image encoding with format-specific parameters.
//!
//! JPEG is the one lossy format and the only one that honors the
//! quality parameter; the rest encode exactly the pixels they are
//! given.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{IoError, OutputFormat};
use crate::types::{ImageBuffer, CHANNELS};

/// Encode an image to a file, selecting the container by the path's
/// extension.
///
/// # Arguments
///
/// * `image` - Pixels to encode
/// * `path` - Destination; the extension picks the format
/// * `quality` - JPEG quality (1-100, clamped); ignored by the
///   lossless formats
///
/// # Errors
///
/// Returns `IoError::UnsupportedFormat` for an unknown extension and
/// `IoError::Encode` if encoding or writing fails.
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>, quality: u8) -> Result<(), IoError> {
    let path = path.as_ref();

    let format = OutputFormat::from_path(path).ok_or_else(|| {
        IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_string(),
        )
    })?;

    let encoded = if format.is_lossy() {
        encode_jpeg(&image.pixels, image.width, image.height, quality)?
    } else {
        encode_lossless(image, format)?
    };

    std::fs::write(path, encoded).map_err(|e| IoError::Encode(e.to_string()))
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality);
///   out-of-range values are clamped
///
/// # Errors
///
/// Returns `IoError::Encode` for zero dimensions, a pixel buffer that
/// does not match the dimensions, or an encoder failure.
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, IoError> {
    if width == 0 || height == 0 {
        return Err(IoError::Encode(format!(
            "invalid dimensions: {}x{}",
            width, height
        )));
    }

    let expected_len = (width as usize) * (height as usize) * CHANNELS as usize;
    if pixels.len() != expected_len {
        return Err(IoError::Encode(format!(
            "invalid pixel data: expected {} bytes, got {}",
            expected_len,
            pixels.len()
        )));
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| IoError::Encode(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode through the image crate's lossless writers.
fn encode_lossless(image: &ImageBuffer, format: OutputFormat) -> Result<Vec<u8>, IoError> {
    let rgb = image.to_rgb_image().ok_or_else(|| {
        IoError::Encode(format!(
            "invalid pixel data: expected {} bytes, got {}",
            (image.width * image.height * CHANNELS) as usize,
            image.pixels.len()
        ))
    })?;

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, format.to_image_format())
        .map_err(|e| IoError::Encode(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=40, 1u32..=40)
    }

    proptest! {
        /// Property: Valid input always produces a well-formed JPEG for
        /// any quality value.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in any::<u8>(),
        ) {
            let size = (width * height * 3) as usize;
            let pixels = vec![128u8; size];

            let jpeg_bytes = encode_jpeg(&pixels, width, height, quality).unwrap();

            prop_assert!(jpeg_bytes.len() >= 4);
            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
            let len = jpeg_bytes.len();
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
        }

        /// Property: Encoding is deterministic.
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let size = (width * height * 3) as usize;
            let pixels = vec![100u8; size];

            let result1 = encode_jpeg(&pixels, width, height, quality).unwrap();
            let result2 = encode_jpeg(&pixels, width, height, quality).unwrap();

            prop_assert_eq!(result1, result2);
        }

        /// Property: A pixel buffer whose length does not match the
        /// dimensions is always rejected.
        #[test]
        fn prop_mismatched_length_rejected(
            (width, height) in dimensions_strategy(),
            delta in prop_oneof![(-12i64..=-1), (1i64..=12)],
        ) {
            let expected = (width * height * 3) as i64;
            let actual = (expected + delta).max(0) as usize;
            prop_assume!(actual as i64 != expected);

            let pixels = vec![128u8; actual];
            let result = encode_jpeg(&pixels, width, height, 90);

            prop_assert!(matches!(result, Err(IoError::Encode(_))));
        }
    }
}
