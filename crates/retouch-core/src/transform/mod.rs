//! Geometric transform operations: resize, crop, flip and rotation.
//!
//! Every function here is pure: it reads the source buffer and returns a
//! brand-new [`ImageBuffer`](crate::types::ImageBuffer), leaving the
//! source untouched.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Crop coordinates are absolute pixels
//! - Rotation angles are in degrees, positive = counter-clockwise

use thiserror::Error;

mod crop;
mod flip;
mod resize;
mod rotation;

pub use crop::crop;
pub use flip::flip;
pub use resize::resize;
pub use rotation::rotate;

/// Errors that can occur during geometric transforms.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The crop rectangle extends past the source extents.
    #[error(
        "crop rectangle ({x}, {y}, {width}x{height}) exceeds image bounds ({image_width}x{image_height})"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// A requested output dimension is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The source pixel buffer does not match its declared dimensions.
    #[error("pixel buffer mismatch: expected {expected} bytes (width * height * 3), got {actual}")]
    BufferMismatch { expected: usize, actual: usize },
}
