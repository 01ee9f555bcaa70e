//! Rectangle extraction with strict bounds checking.

use super::TransformError;
use crate::types::{ImageBuffer, CHANNELS};

/// Extract a rectangular region from an image.
///
/// The region is specified in absolute pixel coordinates with the
/// origin at the top-left corner.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `x` - Left edge of the region
/// * `y` - Top edge of the region
/// * `width` - Region width in pixels
/// * `height` - Region height in pixels
///
/// # Returns
///
/// A new `ImageBuffer` containing exactly the requested rectangle,
/// with storage independent of the source.
///
/// # Errors
///
/// Returns `TransformError::OutOfBounds` unless
/// `x + width <= image.width` and `y + height <= image.height`, and
/// `TransformError::InvalidDimensions` if the region is empty.
pub fn crop(
    image: &ImageBuffer,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<ImageBuffer, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    // Widened arithmetic so x + width cannot wrap
    let exceeds_x = u64::from(x) + u64::from(width) > u64::from(image.width);
    let exceeds_y = u64::from(y) + u64::from(height) > u64::from(image.height);
    if exceeds_x || exceeds_y {
        return Err(TransformError::OutOfBounds {
            x,
            y,
            width,
            height,
            image_width: image.width,
            image_height: image.height,
        });
    }

    let channels = CHANNELS as usize;
    let src_stride = image.width as usize * channels;
    let row_bytes = width as usize * channels;

    let mut output = vec![0u8; height as usize * row_bytes];

    // Copy whole rows at a time; the region is contiguous per row
    for row in 0..height as usize {
        let src_start = (y as usize + row) * src_stride + x as usize * channels;
        let dst_start = row * row_bytes;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    Ok(ImageBuffer::new(width, height, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> ImageBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v); // R
                pixels.push(v); // G
                pixels.push(v); // B
            }
        }
        ImageBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = test_image(100, 100);
        let result = crop(&img, 0, 0, 100, 100).unwrap();

        assert_eq!(result.width, 100);
        assert_eq!(result.height, 100);
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_center_crop_values() {
        let img = test_image(10, 10);
        let result = crop(&img, 2, 2, 6, 6).unwrap();

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 6);

        // First pixel comes from position (2, 2): value (2 * 10 + 2) % 256 = 22
        assert_eq!(result.pixels[0], 22);
        assert_eq!(result.pixels[1], 22);
        assert_eq!(result.pixels[2], 22);
    }

    #[test]
    fn test_crop_at_exact_edge_succeeds() {
        let img = test_image(100, 100);
        // 80 + 20 == 100 is still in bounds
        let result = crop(&img, 80, 80, 20, 20).unwrap();

        assert_eq!(result.width, 20);
        assert_eq!(result.height, 20);
    }

    #[test]
    fn test_crop_past_edge_fails() {
        let img = test_image(100, 100);

        // 80 + 30 = 110 > 100
        let result = crop(&img, 80, 80, 30, 30);
        assert!(matches!(result, Err(TransformError::OutOfBounds { .. })));
    }

    #[test]
    fn test_crop_width_overflow_fails() {
        let img = test_image(50, 50);
        let result = crop(&img, 0, 0, u32::MAX, 10);
        assert!(matches!(result, Err(TransformError::OutOfBounds { .. })));
    }

    #[test]
    fn test_crop_zero_size_fails() {
        let img = test_image(50, 50);
        assert!(matches!(
            crop(&img, 0, 0, 0, 10),
            Err(TransformError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            crop(&img, 0, 0, 10, 0),
            Err(TransformError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_crop_rectangular() {
        let img = test_image(200, 100);
        let result = crop(&img, 0, 0, 50, 100).unwrap();

        assert_eq!(result.width, 50);
        assert_eq!(result.height, 100);
    }

    #[test]
    fn test_crop_does_not_alias_source() {
        let img = test_image(10, 10);
        let mut result = crop(&img, 3, 3, 4, 4).unwrap();

        // Mutating the crop must not touch the original
        result.pixels[0] = 201;
        assert_eq!(img.pixels[(3 * 10 + 3) * 3], 33);
    }

    #[test]
    fn test_single_pixel_crop() {
        let img = test_image(10, 10);
        let result = crop(&img, 9, 9, 1, 1).unwrap();

        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
        // (9 * 10 + 9) % 256 = 99
        assert_eq!(result.pixels, vec![99, 99, 99]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
