//! Finalization strategy for generated WAV files.
//!
//! The encoder is probed once per run. Afterwards every sound is finalized
//! either by transcoding or by keeping the WAV as a placeholder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audio::WAV_EXTENSION;
use crate::error::{GenError, Result};
use crate::types::{ArtifactOutcome, FallbackReason};

use super::encoder::{Encoder, EncoderSettings};

/// How WAV intermediates are turned into final artifacts.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Transcode with a working encoder, falling back per file on failure.
    Transcode(Encoder),

    /// Keep every WAV as a placeholder.
    Placeholder(FallbackReason),
}

impl Strategy {
    /// Probes for the encoder unless transcoding is disabled.
    pub fn detect(settings: &EncoderSettings, enabled: bool) -> Self {
        if !enabled {
            return Strategy::Placeholder(FallbackReason::Disabled);
        }

        match Encoder::probe(settings) {
            Ok(encoder) => Strategy::Transcode(encoder),
            Err(e) => {
                tracing::info!(error = %e, "keeping WAV placeholders");
                Strategy::Placeholder(FallbackReason::EncoderUnavailable)
            }
        }
    }

    /// Returns true if this strategy will attempt transcoding.
    pub fn can_transcode(&self) -> bool {
        matches!(self, Strategy::Transcode(_))
    }

    /// Turns the WAV at `wav_path` into the final artifact for `target_path`.
    ///
    /// On success only the compressed file remains. On fallback only the WAV
    /// remains, at [`fallback_path`] of the target. Filesystem errors while
    /// cleaning up are fatal; encoder errors are not.
    pub fn finalize(&self, wav_path: &Path, target_path: &Path) -> Result<ArtifactOutcome> {
        let reason = match self {
            Strategy::Transcode(encoder) => match encoder.transcode(wav_path, target_path) {
                Ok(()) => {
                    fs::remove_file(wav_path).map_err(|e| {
                        GenError::output_write_failed(
                            format!("remove intermediate {}", wav_path.display()),
                            e,
                        )
                    })?;
                    return Ok(ArtifactOutcome::Transcoded {
                        path: target_path.to_path_buf(),
                    });
                }
                Err(e) => {
                    tracing::warn!(path = %target_path.display(), error = %e.message, "transcode failed, keeping WAV");
                    FallbackReason::EncoderFailed { message: e.message }
                }
            },
            Strategy::Placeholder(reason) => reason.clone(),
        };

        keep_placeholder(wav_path, target_path, reason)
    }
}

/// Returns the placeholder path for a compressed target: same stem, `.wav`.
pub fn fallback_path(target_path: &Path) -> PathBuf {
    target_path.with_extension(WAV_EXTENSION)
}

fn keep_placeholder(
    wav_path: &Path,
    target_path: &Path,
    reason: FallbackReason,
) -> Result<ArtifactOutcome> {
    let placeholder = fallback_path(target_path);

    if wav_path != placeholder {
        fs::rename(wav_path, &placeholder).map_err(|e| {
            GenError::output_write_failed(
                format!(
                    "rename {} to {}",
                    wav_path.display(),
                    placeholder.display()
                ),
                e,
            )
        })?;
    }

    // A compressed file from an earlier run or a half-written encoder output
    // must not sit next to the placeholder.
    if target_path != placeholder {
        match fs::remove_file(target_path) {
            Ok(()) => {
                tracing::debug!(path = %target_path.display(), "removed stale compressed file");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(GenError::output_write_failed(
                    format!("remove stale {}", target_path.display()),
                    e,
                ));
            }
        }
    }

    tracing::debug!(path = %placeholder.display(), reason = reason.as_str(), "kept placeholder");
    Ok(ArtifactOutcome::Fallback {
        path: placeholder,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fallback_path_swaps_extension() {
        assert_eq!(
            fallback_path(Path::new("out/ui/click.mp3")),
            PathBuf::from("out/ui/click.wav")
        );
        assert_eq!(
            fallback_path(Path::new("out/ui/click.ogg")),
            PathBuf::from("out/ui/click.wav")
        );
    }

    #[test]
    fn disabled_strategy_skips_probe() {
        let settings = EncoderSettings {
            program: "placeholder-audio-no-such-encoder".to_string(),
            ..Default::default()
        };
        let strategy = Strategy::detect(&settings, false);
        assert!(matches!(
            strategy,
            Strategy::Placeholder(FallbackReason::Disabled)
        ));

        let strategy = Strategy::detect(&settings, true);
        assert!(matches!(
            strategy,
            Strategy::Placeholder(FallbackReason::EncoderUnavailable)
        ));
        assert!(!strategy.can_transcode());
    }

    #[test]
    fn placeholder_keeps_wav_in_place() {
        let dir = tempdir().unwrap();
        let wav = dir.path().join("click.wav");
        let target = dir.path().join("click.mp3");
        fs::write(&wav, b"RIFF").unwrap();

        let strategy = Strategy::Placeholder(FallbackReason::EncoderUnavailable);
        let outcome = strategy.finalize(&wav, &target).unwrap();

        assert_eq!(
            outcome,
            ArtifactOutcome::Fallback {
                path: wav.clone(),
                reason: FallbackReason::EncoderUnavailable,
            }
        );
        assert!(wav.exists());
        assert!(!target.exists());
    }

    #[test]
    fn placeholder_renames_and_clears_stale_target() {
        let dir = tempdir().unwrap();
        let wav = dir.path().join("click.partial");
        let target = dir.path().join("click.mp3");
        fs::write(&wav, b"RIFF").unwrap();
        fs::write(&target, b"old mp3").unwrap();

        let strategy = Strategy::Placeholder(FallbackReason::Disabled);
        let outcome = strategy.finalize(&wav, &target).unwrap();

        assert_eq!(outcome.path(), dir.path().join("click.wav"));
        assert!(!wav.exists());
        assert!(!target.exists());
        assert!(dir.path().join("click.wav").exists());
    }

    #[test]
    fn missing_intermediate_is_fatal() {
        let dir = tempdir().unwrap();
        let wav = dir.path().join("gone.partial");
        let target = dir.path().join("gone.mp3");

        let strategy = Strategy::Placeholder(FallbackReason::Disabled);
        assert!(strategy.finalize(&wav, &target).is_err());
    }
}
