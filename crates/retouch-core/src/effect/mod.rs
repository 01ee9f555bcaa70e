//! Stochastic and neighborhood effects: noise synthesis and blur
//! filters.
//!
//! Noise functions are generic over the random source so callers can
//! pass a seeded generator for reproducible output; blur filters are
//! fully deterministic.

mod blur;
mod noise;

pub use blur::blur;
pub use noise::add_noise;
