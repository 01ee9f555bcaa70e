//! The chainable editing state machine.
//!
//! An [`ImageEditor`] owns exactly one buffer at all times. It can only
//! be constructed around pixels, by decoding a file or from an
//! existing buffer, so every operation has an image to work on and
//! there is no "empty editor" state to defend against.
//!
//! Each operation computes a new buffer through the corresponding pure
//! function and then replaces the owned one, so a failed operation
//! leaves the previous state untouched. Operations return the editor
//! again to permit chaining:
//!
//! ```ignore
//! let mut editor = ImageEditor::open("photo.jpg")?;
//! editor
//!     .resize(800, 600, Interpolation::Bicubic)?
//!     .flip(true, false)
//!     .adjust_brightness_contrast(10, 1.1)
//!     .blur(BlurKind::Gaussian, 3);
//! editor.save("photo_out.jpg")?;
//! ```

use std::path::Path;

use rand::Rng;
use thiserror::Error;

use crate::io::{self, IoError, DEFAULT_JPEG_QUALITY};
use crate::transform::TransformError;
use crate::types::{BlurKind, ImageBuffer, Interpolation, NoiseKind};
use crate::{adjust, effect, transform};

/// Errors surfaced by editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A load or save failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// A geometric transform rejected its parameters.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Chainable image editor owning the current working buffer.
///
/// Cloning an editor deep-copies the buffer; the clone and the
/// original never share storage, so branching an edit is safe.
#[derive(Debug, Clone)]
pub struct ImageEditor {
    image: ImageBuffer,
}

impl ImageEditor {
    /// Open an image file and build an editor around it.
    ///
    /// # Errors
    ///
    /// Propagates `IoError::NotFound` for a missing file and
    /// `IoError::Decode` for undecodable data.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        Ok(Self {
            image: io::load(path)?,
        })
    }

    /// Build an editor around pixels the caller already holds.
    pub fn from_buffer(image: ImageBuffer) -> Self {
        Self { image }
    }

    /// The current working buffer.
    pub fn image(&self) -> &ImageBuffer {
        &self.image
    }

    /// Consume the editor and take the buffer out.
    pub fn into_buffer(self) -> ImageBuffer {
        self.image
    }

    /// Save the current buffer with the default JPEG quality.
    ///
    /// The format is selected by the path's extension; see
    /// [`crate::io::save`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        self.save_with_quality(path, DEFAULT_JPEG_QUALITY)
    }

    /// Save the current buffer with an explicit JPEG quality (ignored
    /// by lossless formats).
    pub fn save_with_quality(
        &self,
        path: impl AsRef<Path>,
        quality: u8,
    ) -> Result<(), EditorError> {
        io::save(&self.image, path, quality)?;
        Ok(())
    }

    /// Resample to exact dimensions.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
        interpolation: Interpolation,
    ) -> Result<&mut Self, EditorError> {
        self.image = transform::resize(&self.image, width, height, interpolation)?;
        Ok(self)
    }

    /// Extract a rectangle in absolute pixel coordinates.
    pub fn crop(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<&mut Self, EditorError> {
        self.image = transform::crop(&self.image, x, y, width, height)?;
        Ok(self)
    }

    /// Rotate about the image center.
    pub fn rotate(&mut self, angle_degrees: f64) -> &mut Self {
        self.image = transform::rotate(&self.image, angle_degrees, None);
        self
    }

    /// Rotate about an explicit center point.
    pub fn rotate_about(&mut self, angle_degrees: f64, center: (f64, f64)) -> &mut Self {
        self.image = transform::rotate(&self.image, angle_degrees, Some(center));
        self
    }

    /// Mirror across one or both axes.
    pub fn flip(&mut self, horizontal: bool, vertical: bool) -> &mut Self {
        self.image = transform::flip(&self.image, horizontal, vertical);
        self
    }

    /// Adjust brightness (additive) and contrast (multiplicative).
    pub fn adjust_brightness_contrast(&mut self, brightness: i32, contrast: f32) -> &mut Self {
        self.image = adjust::brightness_contrast(&self.image, brightness, contrast);
        self
    }

    /// Shift each channel by its own delta.
    pub fn adjust_color_balance(&mut self, red: i32, green: i32, blue: i32) -> &mut Self {
        self.image = adjust::color_balance(&self.image, red, green, blue);
        self
    }

    /// Convert to three-channel grayscale.
    pub fn grayscale(&mut self) -> &mut Self {
        self.image = adjust::grayscale(&self.image);
        self
    }

    /// Add synthetic noise using a fresh thread-local random source.
    pub fn add_noise(&mut self, kind: NoiseKind, intensity: f64) -> &mut Self {
        self.add_noise_with_rng(kind, intensity, &mut rand::rng())
    }

    /// Add synthetic noise from a caller-supplied random source, for
    /// reproducible pipelines.
    pub fn add_noise_with_rng<R: Rng + ?Sized>(
        &mut self,
        kind: NoiseKind,
        intensity: f64,
        rng: &mut R,
    ) -> &mut Self {
        self.image = effect::add_noise(&self.image, kind, intensity, rng);
        self
    }

    /// Apply a blur filter.
    pub fn blur(&mut self, kind: BlurKind, kernel_size: u32) -> &mut Self {
        self.image = effect::blur(&self.image, kind, kernel_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_editor(width: u32, height: u32) -> ImageEditor {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v);
                pixels.push(v);
                pixels.push(v);
            }
        }
        ImageEditor::from_buffer(ImageBuffer::new(width, height, pixels))
    }

    #[test]
    fn test_open_missing_file() {
        let result = ImageEditor::open("/no/such/image.png");
        assert!(matches!(result, Err(EditorError::Io(IoError::NotFound(_)))));
    }

    #[test]
    fn test_resize_replaces_buffer() {
        let mut editor = test_editor(100, 100);
        editor.resize(50, 50, Interpolation::Bicubic).unwrap();

        assert_eq!(editor.image().width, 50);
        assert_eq!(editor.image().height, 50);
    }

    #[test]
    fn test_failed_crop_leaves_buffer_untouched() {
        let mut editor = test_editor(100, 100);
        let before = editor.image().pixels.clone();

        // 80 + 30 > 100: rejected
        let result = editor.crop(80, 80, 30, 30);
        assert!(matches!(
            result,
            Err(EditorError::Transform(TransformError::OutOfBounds { .. }))
        ));

        assert_eq!(editor.image().width, 100);
        assert_eq!(editor.image().height, 100);
        assert_eq!(editor.image().pixels, before);
    }

    #[test]
    fn test_failed_resize_leaves_buffer_untouched() {
        let mut editor = test_editor(40, 40);

        assert!(editor.resize(0, 10, Interpolation::Nearest).is_err());
        assert_eq!(editor.image().width, 40);
        assert_eq!(editor.image().height, 40);
    }

    #[test]
    fn test_chaining_across_operations() {
        let mut editor = test_editor(100, 100);

        editor
            .resize(60, 60, Interpolation::Bilinear)
            .unwrap()
            .crop(10, 10, 40, 40)
            .unwrap()
            .flip(true, false)
            .adjust_brightness_contrast(5, 1.1)
            .adjust_color_balance(10, 0, -10)
            .blur(BlurKind::Average, 3);

        assert_eq!(editor.image().width, 40);
        assert_eq!(editor.image().height, 40);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut editor = test_editor(30, 30);
        let mut branch = editor.clone();

        branch.adjust_brightness_contrast(50, 1.0);

        // The branch changed, the original did not
        assert_ne!(editor.image().pixels, branch.image().pixels);

        editor.flip(false, true);
        let branch_before = branch.image().pixels.clone();
        editor.adjust_color_balance(5, 5, 5);
        assert_eq!(branch.image().pixels, branch_before);
    }

    #[test]
    fn test_identity_operations_preserve_pixels() {
        let mut editor = test_editor(20, 20);
        let before = editor.image().pixels.clone();

        editor
            .flip(false, false)
            .adjust_brightness_contrast(0, 1.0)
            .adjust_color_balance(0, 0, 0)
            .rotate(0.0);

        assert_eq!(editor.image().pixels, before);
    }

    #[test]
    fn test_add_noise_with_seeded_rng_is_reproducible() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut editor1 = test_editor(20, 20);
        let mut editor2 = test_editor(20, 20);

        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);

        editor1.add_noise_with_rng(NoiseKind::Gaussian, 0.2, &mut rng1);
        editor2.add_noise_with_rng(NoiseKind::Gaussian, 0.2, &mut rng2);

        assert_eq!(editor1.image().pixels, editor2.image().pixels);
    }

    #[test]
    fn test_rotate_about_explicit_center() {
        let mut centered = test_editor(20, 20);
        let mut cornered = test_editor(20, 20);

        centered.rotate(30.0);
        cornered.rotate_about(30.0, (0.0, 0.0));

        assert_ne!(centered.image().pixels, cornered.image().pixels);
    }

    #[test]
    fn test_into_buffer_returns_current_state() {
        let mut editor = test_editor(16, 16);
        editor.grayscale();

        let buffer = editor.into_buffer();
        assert_eq!(buffer.width, 16);
        for chunk in buffer.pixels.chunks_exact(3) {
            assert_eq!(chunk[0], chunk[1]);
            assert_eq!(chunk[1], chunk[2]);
        }
    }
}
