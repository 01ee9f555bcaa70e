//! Core types for the editing pipeline: the pixel buffer and the closed
//! parameter enums.

use serde::{Deserialize, Serialize};

/// Number of samples per pixel. The whole pipeline operates on
/// interleaved 8-bit RGB data.
pub const CHANNELS: u32 = 3;

/// An owned raster image with 8-bit RGB pixel data.
///
/// Every operation in the pipeline consumes a reference to a buffer and
/// produces a brand-new one; no operation mutates another buffer's
/// storage. Cloning performs a full deep copy of the pixel vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new ImageBuffer with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * CHANNELS) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an ImageBuffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for codec and resampling work.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

/// Sampling kernel used by [`crate::transform::resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation (slower, highest quality).
    #[default]
    Bicubic,
}

impl Interpolation {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            Interpolation::Nearest => image::imageops::FilterType::Nearest,
            Interpolation::Bilinear => image::imageops::FilterType::Triangle,
            Interpolation::Bicubic => image::imageops::FilterType::CatmullRom,
        }
    }

    /// Parse an interpolation name as it arrives from the form boundary.
    ///
    /// Unrecognized names fall back to [`Interpolation::Bicubic`], the
    /// documented default of the resize operation.
    pub fn from_name(name: &str) -> Self {
        match name {
            "nearest" => Interpolation::Nearest,
            "bilinear" => Interpolation::Bilinear,
            "bicubic" => Interpolation::Bicubic,
            _ => Interpolation::default(),
        }
    }
}

/// Kind of synthetic noise applied by [`crate::effect::add_noise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Zero-mean normal perturbation of every sample.
    Gaussian,
    /// Full-white and full-black impulses at random pixel positions.
    SaltPepper,
}

impl NoiseKind {
    /// Parse a noise kind name as it arrives from the form boundary.
    ///
    /// Returns `None` for unrecognized names so the caller can keep the
    /// legacy contract of leaving the image unchanged instead of
    /// silently substituting a kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gaussian" => Some(NoiseKind::Gaussian),
            "salt_pepper" => Some(NoiseKind::SaltPepper),
            _ => None,
        }
    }
}

/// Kind of blur filter applied by [`crate::effect::blur`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurKind {
    /// Unweighted mean of the square neighborhood.
    Average,
    /// Gaussian-weighted mean; sigma is derived from the kernel size.
    Gaussian,
    /// Per-channel median of the neighborhood (robust to impulse noise).
    Median,
}

impl BlurKind {
    /// Parse a blur kind name as it arrives from the form boundary.
    ///
    /// Returns `None` for unrecognized names; see [`NoiseKind::from_name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "average" => Some(BlurKind::Average),
            "gaussian" => Some(BlurKind::Gaussian),
            "median" => Some(BlurKind::Median),
            _ => None,
        }
    }
}
