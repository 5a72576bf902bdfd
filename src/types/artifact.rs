//! Artifact types describing what ended up on disk for each sound.
//!
//! The transcode step reports a tagged [`ArtifactOutcome`] rather than a
//! boolean, and [`RunSummary`] accumulates outcomes across a run in place of
//! global counters.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Why a sound was kept as an uncompressed placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The encoder was not found, or did not answer the version probe.
    EncoderUnavailable,

    /// The encoder ran but exited with a failure status.
    EncoderFailed {
        /// Encoder diagnostics (trimmed stderr or spawn error).
        message: String,
    },

    /// Transcoding was switched off by configuration.
    Disabled,
}

impl FallbackReason {
    /// Returns the string representation of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::EncoderUnavailable => "encoder_unavailable",
            FallbackReason::EncoderFailed { .. } => "encoder_failed",
            FallbackReason::Disabled => "disabled",
        }
    }
}

/// Final state of one generated sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactOutcome {
    /// The compressed file exists at the requested path; the WAV is gone.
    Transcoded { path: PathBuf },

    /// The WAV placeholder exists at the fallback path.
    Fallback {
        path: PathBuf,
        reason: FallbackReason,
    },
}

impl ArtifactOutcome {
    /// Returns the path of the file that was kept.
    pub fn path(&self) -> &Path {
        match self {
            ArtifactOutcome::Transcoded { path } => path,
            ArtifactOutcome::Fallback { path, .. } => path,
        }
    }

    /// Returns true if the sound was transcoded.
    pub fn is_transcoded(&self) -> bool {
        matches!(self, ArtifactOutcome::Transcoded { .. })
    }
}

/// One sound that was generated during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Category the sound belongs to.
    pub category: String,

    /// Sound name (file stem).
    pub name: String,

    /// Number of samples synthesized.
    pub sample_count: usize,

    /// Actual duration of the written audio in seconds.
    pub duration_sec: f32,

    /// Where the artifact ended up.
    pub outcome: ArtifactOutcome,
}

impl GeneratedArtifact {
    /// Returns the file name of the kept artifact, e.g. `hover-tick.mp3`.
    pub fn file_name(&self) -> String {
        self.outcome
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Accumulated results of one run over a manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Whether a working encoder was detected for this run.
    pub encoder_available: bool,

    /// Every artifact produced, in generation order.
    pub artifacts: Vec<GeneratedArtifact>,
}

impl RunSummary {
    /// Creates an empty summary.
    pub fn new(encoder_available: bool) -> Self {
        Self {
            encoder_available,
            artifacts: Vec::new(),
        }
    }

    /// Records a finished artifact.
    pub fn record(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    /// Number of artifacts on disk.
    pub fn total(&self) -> usize {
        self.artifacts.len()
    }

    /// Number of sounds that were transcoded.
    pub fn transcoded(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| a.outcome.is_transcoded())
            .count()
    }

    /// Number of sounds kept as placeholders for any reason.
    pub fn placeholders(&self) -> usize {
        self.total() - self.transcoded()
    }

    /// Number of sounds whose transcode was attempted and failed.
    pub fn failed_conversions(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| {
                matches!(
                    a.outcome,
                    ArtifactOutcome::Fallback {
                        reason: FallbackReason::EncoderFailed { .. },
                        ..
                    }
                )
            })
            .count()
    }
}
