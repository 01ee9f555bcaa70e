//! Synthetic noise injection.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::types::{ImageBuffer, NoiseKind, CHANNELS};

/// Add synthetic noise to an image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `kind` - Noise model to apply
/// * `intensity` - Nominal strength in [0, 1]; negative values are
///   treated as zero
/// * `rng` - Random source; pass a seeded generator for reproducible
///   output
///
/// # Behavior
///
/// * `Gaussian`: every sample is perturbed by an independently drawn
///   zero-mean normal value with standard deviation
///   `sqrt(intensity * 255)`, then saturating-clamped to [0, 255].
///   Channels are perturbed independently.
/// * `SaltPepper`: `ceil(intensity * pixel_count * 0.5)` pixel
///   coordinates are drawn with replacement and set to white across
///   all channels, then the same count again, independently, set to
///   black. Duplicate draws mean the realized affected fraction can be
///   below the nominal intensity.
pub fn add_noise<R: Rng + ?Sized>(
    image: &ImageBuffer,
    kind: NoiseKind,
    intensity: f64,
    rng: &mut R,
) -> ImageBuffer {
    match kind {
        NoiseKind::Gaussian => gaussian_noise(image, intensity, rng),
        NoiseKind::SaltPepper => salt_pepper_noise(image, intensity, rng),
    }
}

fn gaussian_noise<R: Rng + ?Sized>(image: &ImageBuffer, intensity: f64, rng: &mut R) -> ImageBuffer {
    let sigma = (intensity.max(0.0) * 255.0).sqrt();
    if sigma == 0.0 {
        return image.clone();
    }
    let Ok(normal) = Normal::new(0.0, sigma) else {
        return image.clone();
    };

    let mut pixels = image.pixels.clone();
    for v in pixels.iter_mut() {
        let noisy = *v as f64 + normal.sample(rng);
        *v = noisy.round().clamp(0.0, 255.0) as u8;
    }

    ImageBuffer::new(image.width, image.height, pixels)
}

fn salt_pepper_noise<R: Rng + ?Sized>(
    image: &ImageBuffer,
    intensity: f64,
    rng: &mut R,
) -> ImageBuffer {
    if image.is_empty() {
        return image.clone();
    }

    let count = (intensity.max(0.0) * image.pixel_count() as f64 * 0.5).ceil() as u64;
    let channels = CHANNELS as usize;
    let mut pixels = image.pixels.clone();

    for fill in [255u8, 0u8] {
        for _ in 0..count {
            let x = rng.random_range(0..image.width) as usize;
            let y = rng.random_range(0..image.height) as usize;
            let idx = (y * image.width as usize + x) * channels;
            pixels[idx..idx + channels].fill(fill);
        }
    }

    ImageBuffer::new(image.width, image.height, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
