//! placeholder-audio: placeholder sound generation for game assets.
//!
//! Synthesizes quiet sine-wave beeps (or silence) for every entry of a
//! manifest, writes them as mono 16-bit WAV files and, when an ffmpeg
//! compatible encoder is available, transcodes them to a compressed format.
//! Without an encoder the WAV files are kept as placeholders.
//!
//! # Modules
//!
//! - [`audio`]: Sample synthesis and WAV output
//! - [`types`]: Core data types (SoundSpec, Manifest, ArtifactOutcome, RunSummary)
//! - [`transcode`]: Encoder probing and the transcode/placeholder strategy
//! - [`generation`]: The per-manifest generation pipeline
//! - [`config`]: Runtime configuration (GeneratorConfig)
//! - [`error`]: Error types and codes (GenError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use placeholder_audio::{
//!     config::GeneratorConfig,
//!     generation::generate_manifest,
//!     transcode::Strategy,
//!     types::Manifest,
//! };
//!
//! let config = GeneratorConfig::from_env();
//! let strategy = Strategy::detect(&config.encoder, config.transcode);
//! let summary = generate_manifest(&Manifest::builtin(), &config, &strategy, |_| {})?;
//! println!("{} files", summary.total());
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod report;
pub mod transcode;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::GeneratorConfig;
pub use error::{ErrorCode, GenError, Result};
pub use transcode::{Encoder, EncoderSettings, Strategy};
pub use types::{
    ArtifactOutcome, Category, FallbackReason, GeneratedArtifact, Manifest, RunSummary, SoundSpec,
};
