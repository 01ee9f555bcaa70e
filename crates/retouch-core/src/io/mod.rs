//! File decode and encode with format dispatch by extension.
//!
//! This is the only part of the pipeline that touches storage; the
//! transform, adjustment and effect modules never perform I/O, and
//! nothing here performs pixel math beyond format conversion.

use std::path::{Path, PathBuf};

use thiserror::Error;

mod load;
mod save;

pub use load::{load, Orientation};
pub use save::{encode_jpeg, save};

/// Default JPEG quality used when the caller does not specify one.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Errors that can occur while loading or saving image files.
#[derive(Debug, Error)]
pub enum IoError {
    /// The source file does not exist.
    #[error("image not found at {0}")]
    NotFound(PathBuf),

    /// The source file could not be read or decoded.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The output path's extension names no supported format.
    #[error("unsupported output format: {0:?}")]
    UnsupportedFormat(String),

    /// Encoding or writing the output failed.
    #[error("failed to encode image: {0}")]
    Encode(String),
}

/// Output container, selected purely by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Gif,
    Tiff,
}

impl OutputFormat {
    /// Determine the output format from a path's extension,
    /// case-insensitively. Returns `None` for missing or unsupported
    /// extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "gif" => Some(OutputFormat::Gif),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            _ => None,
        }
    }

    /// Convert to the image crate's format selector.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Gif => image::ImageFormat::Gif,
            OutputFormat::Tiff => image::ImageFormat::Tiff,
        }
    }

    /// Whether this format's encoder takes the lossy quality parameter.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}
