//! Core types for placeholder-audio.
//!
//! This module re-exports all the core data types used throughout the crate:
//! - [`SoundSpec`]: A named request for a tone of given duration and frequency
//! - [`Manifest`]: Sound specs grouped by output category
//! - [`ArtifactOutcome`]: Where a generated sound ended up on disk
//! - [`RunSummary`]: Outcomes accumulated over one run

mod artifact;
mod manifest;
mod sound;

// Re-export all types at the module level
pub use artifact::{ArtifactOutcome, FallbackReason, GeneratedArtifact, RunSummary};
pub use manifest::{Category, Manifest};
pub use sound::SoundSpec;
