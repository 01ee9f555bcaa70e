//! Resampling to exact target dimensions.
//!
//! Delegates the kernel work to the `image` crate's resampler; the
//! choice of kernel is the caller's via [`Interpolation`].

use super::TransformError;
use crate::types::{ImageBuffer, Interpolation, CHANNELS};

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - Source image to resample
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `interpolation` - Sampling kernel
///
/// # Returns
///
/// A new `ImageBuffer` of exactly `width x height`.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if either target
/// dimension is zero.
pub fn resize(
    image: &ImageBuffer,
    width: u32,
    height: u32,
    interpolation: Interpolation,
) -> Result<ImageBuffer, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| TransformError::BufferMismatch {
            expected: (image.width * image.height * CHANNELS) as usize,
            actual: image.pixels.len(),
        })?;

    let resized =
        image::imageops::resize(&rgb_image, width, height, interpolation.to_image_filter());

    Ok(ImageBuffer::from_rgb_image(resized))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
