//! Retouch Core - Image editing pipeline
//!
//! This crate provides the image editing core for Retouch: an owned
//! RGB8 pixel buffer, pure transform/adjustment/effect functions over
//! it, file decode/encode with format dispatch by extension, and a
//! chainable [`ImageEditor`] that sequences them.
//!
//! # Architecture
//!
//! - [`types`] - the [`ImageBuffer`] value type and parameter enums
//! - [`transform`] - geometric operations (resize, crop, flip, rotate)
//! - [`adjust`] - pixelwise tonal operations
//! - [`effect`] - noise synthesis and blur filters
//! - [`io`] - decode-from-file / encode-to-file
//! - [`editor`] - the orchestrator owning the current buffer
//!
//! The pure modules never touch storage, the io module never does
//! pixel math, and the editor implements no algorithms itself - it
//! only sequences operations and owns the working buffer.

pub mod adjust;
pub mod editor;
pub mod effect;
pub mod io;
pub mod luminance;
pub mod transform;
pub mod types;

pub use editor::{EditorError, ImageEditor};
pub use types::{BlurKind, ImageBuffer, Interpolation, NoiseKind, CHANNELS};
