//! Transcode step.
//!
//! Optional conversion of WAV intermediates to a compressed format through
//! an external encoder, with graceful fallback to WAV placeholders.

pub mod encoder;
pub mod strategy;

// Re-export commonly used items
pub use encoder::{Encoder, EncoderSettings};
pub use strategy::{fallback_path, Strategy};
