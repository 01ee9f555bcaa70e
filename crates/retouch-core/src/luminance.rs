//! Luminance calculation using ITU-R BT.709 coefficients.
//!
//! Shared by the grayscale adjustment; kept separate so any future
//! tonal operation weights channels the same way.

/// ITU-R BT.709 coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.0722;

/// Calculate luminance from u8 RGB values (0 to 255).
#[inline]
pub fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}
