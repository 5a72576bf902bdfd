//! Sound generation module.
//!
//! Provides the generation pipeline over a manifest.

pub mod pipeline;

// Re-export commonly used items
pub use pipeline::{
    artifact_paths, generate_manifest, generate_sound, verify_placeholders, ProgressEvent,
};
