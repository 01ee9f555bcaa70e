//! Square-neighborhood blur filters.
//!
//! All three filters share the same geometry: a `k x k` neighborhood
//! centered on each pixel, with coordinates clamped to the image edge.
//! An even `k` is bumped to the next odd value so the kernel stays
//! symmetric.

use crate::types::{BlurKind, ImageBuffer, CHANNELS};

/// Apply a blur filter.
///
/// # Arguments
///
/// * `image` - Source image
/// * `kind` - Filter to apply
/// * `kernel_size` - Side length of the square neighborhood; even
///   values are incremented by one before use, zero behaves as one
///
/// # Behavior
///
/// * `Average`: unweighted mean of the neighborhood.
/// * `Gaussian`: Gaussian-weighted mean; the standard deviation is
///   derived from the kernel size (`0.3 * ((k - 1) * 0.5 - 1) + 0.8`),
///   not caller-specified.
/// * `Median`: per-channel median of the neighborhood.
pub fn blur(image: &ImageBuffer, kind: BlurKind, kernel_size: u32) -> ImageBuffer {
    let k = effective_kernel_size(kernel_size);
    if k == 1 || image.is_empty() {
        return image.clone();
    }

    match kind {
        BlurKind::Average => average_blur(image, k),
        BlurKind::Gaussian => gaussian_blur(image, k),
        BlurKind::Median => median_blur(image, k),
    }
}

/// Coerce the kernel size to the odd value actually used.
fn effective_kernel_size(kernel_size: u32) -> u32 {
    let k = kernel_size.max(1);
    if k % 2 == 0 {
        k + 1
    } else {
        k
    }
}

#[inline]
fn clamped_index(image: &ImageBuffer, x: i64, y: i64) -> usize {
    let sx = x.clamp(0, i64::from(image.width) - 1) as usize;
    let sy = y.clamp(0, i64::from(image.height) - 1) as usize;
    (sy * image.width as usize + sx) * CHANNELS as usize
}

fn average_blur(image: &ImageBuffer, k: u32) -> ImageBuffer {
    let radius = i64::from(k / 2);
    let (w, h) = (i64::from(image.width), i64::from(image.height));
    let count = f64::from(k * k);
    let channels = CHANNELS as usize;

    let mut output = vec![0u8; image.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let mut sums = [0u64; 3];
            for ky in -radius..=radius {
                for kx in -radius..=radius {
                    let idx = clamped_index(image, x + kx, y + ky);
                    for (sum, &v) in sums.iter_mut().zip(&image.pixels[idx..idx + channels]) {
                        *sum += u64::from(v);
                    }
                }
            }

            let dst = ((y * w + x) as usize) * channels;
            for (i, sum) in sums.iter().enumerate() {
                output[dst + i] = (*sum as f64 / count).round() as u8;
            }
        }
    }

    ImageBuffer::new(image.width, image.height, output)
}

/// Build a normalized 1D Gaussian kernel for the given (odd) size.
///
/// Sigma follows the kernel size: `0.3 * ((k - 1) * 0.5 - 1) + 0.8`.
fn gaussian_kernel(size: u32) -> Vec<f32> {
    let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let radius = (size / 2) as i32;

    let mut weights: Vec<f32> = (-radius..=radius)
        .map(|i| (-(i * i) as f32 / (2.0 * sigma * sigma)).exp())
        .collect();

    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

fn gaussian_blur(image: &ImageBuffer, k: u32) -> ImageBuffer {
    let kernel = gaussian_kernel(k);
    let radius = i64::from(k / 2);
    let (w, h) = (i64::from(image.width), i64::from(image.height));
    let channels = CHANNELS as usize;

    // The 2D Gaussian is separable: one horizontal pass into floats,
    // one vertical pass back to bytes
    let mut horizontal = vec![0f32; image.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0f32; 3];
            for (i, &weight) in kernel.iter().enumerate() {
                let idx = clamped_index(image, x + i as i64 - radius, y);
                for (a, &v) in acc.iter_mut().zip(&image.pixels[idx..idx + channels]) {
                    *a += f32::from(v) * weight;
                }
            }
            let dst = ((y * w + x) as usize) * channels;
            horizontal[dst..dst + channels].copy_from_slice(&acc);
        }
    }

    let mut output = vec![0u8; image.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0f32; 3];
            for (i, &weight) in kernel.iter().enumerate() {
                let sy = (y + i as i64 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * channels;
                for (a, &v) in acc.iter_mut().zip(&horizontal[idx..idx + channels]) {
                    *a += v * weight;
                }
            }
            let dst = ((y * w + x) as usize) * channels;
            for (i, a) in acc.iter().enumerate() {
                output[dst + i] = a.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    ImageBuffer::new(image.width, image.height, output)
}

fn median_blur(image: &ImageBuffer, k: u32) -> ImageBuffer {
    let radius = i64::from(k / 2);
    let (w, h) = (i64::from(image.width), i64::from(image.height));
    let channels = CHANNELS as usize;

    let mut output = vec![0u8; image.pixels.len()];
    let mut neighborhood = Vec::with_capacity((k * k) as usize);

    for y in 0..h {
        for x in 0..w {
            let dst = ((y * w + x) as usize) * channels;
            for channel in 0..channels {
                neighborhood.clear();
                for ky in -radius..=radius {
                    for kx in -radius..=radius {
                        let idx = clamped_index(image, x + kx, y + ky);
                        neighborhood.push(image.pixels[idx + channel]);
                    }
                }
                neighborhood.sort_unstable();
                // k * k is odd, so the median is the exact middle element
                output[dst + channel] = neighborhood[neighborhood.len() / 2];
            }
        }
    }

    ImageBuffer::new(image.width, image.height, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
