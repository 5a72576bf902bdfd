//! Generation pipeline for placeholder sounds.
//!
//! Runs synthesize → write WAV → finalize for each sound, one at a time,
//! in manifest order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::{
    read_wav, samples_to_duration, synthesize, write_wav, BITS_PER_SAMPLE, CHANNELS, WAV_EXTENSION,
};
use crate::config::GeneratorConfig;
use crate::error::{ErrorCode, GenError, Result};
use crate::transcode::{EncoderSettings, Strategy};
use crate::types::{
    ArtifactOutcome, Category, GeneratedArtifact, Manifest, RunSummary, SoundSpec,
};

/// Progress notifications emitted while a manifest is processed.
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// A category is about to be processed.
    CategoryStarted { category: &'a Category },

    /// A sound has been finalized.
    ArtifactFinished { artifact: &'a GeneratedArtifact },
}

/// Returns the (WAV intermediate, compressed target) paths for a sound.
///
/// The intermediate is written where the placeholder belongs, so a fallback
/// needs no rename.
pub fn artifact_paths(
    category_dir: &Path,
    name: &str,
    encoder: &EncoderSettings,
) -> (PathBuf, PathBuf) {
    (
        category_dir.join(format!("{}.{}", name, WAV_EXTENSION)),
        category_dir.join(format!("{}.{}", name, encoder.extension)),
    )
}

/// Generates one sound into `category_dir`.
///
/// Invalid specs and filesystem failures are returned as errors; encoder
/// problems end up in the artifact's outcome instead.
pub fn generate_sound(
    spec: &SoundSpec,
    category: &str,
    category_dir: &Path,
    config: &GeneratorConfig,
    strategy: &Strategy,
) -> Result<GeneratedArtifact> {
    if let Some(reason) = spec.validate() {
        return Err(GenError::invalid_specification(reason));
    }

    let samples = synthesize(spec, config.waveform, config.sample_rate)?;
    let (wav_path, target_path) = artifact_paths(category_dir, &spec.name, &config.encoder);

    write_wav(&samples, &wav_path, config.sample_rate)?;
    let outcome = strategy.finalize(&wav_path, &target_path)?;

    Ok(GeneratedArtifact {
        category: category.to_string(),
        name: spec.name.clone(),
        sample_count: samples.len(),
        duration_sec: samples_to_duration(samples.len(), config.sample_rate),
        outcome,
    })
}

/// Generates every sound in the manifest.
///
/// Category directories are created if missing, so repeated runs over the
/// same output directory succeed. The first fatal error stops the run;
/// artifacts produced before it stay on disk.
///
/// # Arguments
///
/// * `manifest` - Sounds to generate, grouped by category
/// * `config` - Output directory, sample rate, waveform and encoder settings
/// * `strategy` - Probed finalization strategy for this run
/// * `on_event` - Callback receiving progress events
pub fn generate_manifest<F>(
    manifest: &Manifest,
    config: &GeneratorConfig,
    strategy: &Strategy,
    mut on_event: F,
) -> Result<RunSummary>
where
    F: FnMut(ProgressEvent<'_>),
{
    let mut summary = RunSummary::new(strategy.can_transcode());

    for category in &manifest.categories {
        let category_dir = config.output_dir.join(&category.name);
        fs::create_dir_all(&category_dir).map_err(|e| {
            GenError::output_write_failed(
                format!("create directory {}", category_dir.display()),
                e,
            )
        })?;

        tracing::debug!(
            category = %category.name,
            dir = %category_dir.display(),
            sounds = category.sounds.len(),
            "generating category"
        );
        on_event(ProgressEvent::CategoryStarted { category });

        for spec in &category.sounds {
            let artifact = generate_sound(spec, &category.name, &category_dir, config, strategy)?;
            on_event(ProgressEvent::ArtifactFinished {
                artifact: &artifact,
            });
            summary.record(artifact);
        }
    }

    Ok(summary)
}

/// Reads every placeholder of a run back and checks it against what was
/// synthesized.
///
/// Each WAV must be mono 16-bit at `sample_rate` and hold exactly the
/// recorded number of samples. Transcoded artifacts are not checked.
pub fn verify_placeholders(summary: &RunSummary, sample_rate: u32) -> Result<()> {
    for artifact in &summary.artifacts {
        let path = match &artifact.outcome {
            ArtifactOutcome::Fallback { path, .. } => path,
            ArtifactOutcome::Transcoded { .. } => continue,
        };

        let (spec, samples) = read_wav(path)?;

        let mismatch = if spec.channels != CHANNELS {
            Some(format!("{} channels, expected {}", spec.channels, CHANNELS))
        } else if spec.bits_per_sample != BITS_PER_SAMPLE {
            Some(format!(
                "{} bits per sample, expected {}",
                spec.bits_per_sample, BITS_PER_SAMPLE
            ))
        } else if spec.sample_rate != sample_rate {
            Some(format!("{} Hz, expected {}", spec.sample_rate, sample_rate))
        } else if samples.len() != artifact.sample_count {
            Some(format!(
                "{} samples, expected {}",
                samples.len(),
                artifact.sample_count
            ))
        } else {
            None
        };

        if let Some(detail) = mismatch {
            return Err(GenError::new(
                ErrorCode::OutputWriteFailed,
                format!("Placeholder {} does not match: {}", path.display(), detail),
            ));
        }

        tracing::debug!(path = %path.display(), samples = samples.len(), "verified placeholder");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FallbackReason;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: dir.to_path_buf(),
            transcode: false,
            ..Default::default()
        }
    }

    fn small_manifest() -> Manifest {
        Manifest {
            categories: vec![
                Category {
                    name: "ui".to_string(),
                    sounds: vec![
                        SoundSpec::new("button-click-1", 0.05, 800.0),
                        SoundSpec::new("hover-tick", 0.03, 1200.0),
                    ],
                },
                Category {
                    name: "gameplay".to_string(),
                    sounds: vec![SoundSpec::new("battle-hit", 0.4, 560.0)],
                },
            ],
        }
    }

    #[test]
    fn artifact_paths_layout() {
        let (wav, target) =
            artifact_paths(Path::new("out/ui"), "toggle-on", &EncoderSettings::default());
        assert_eq!(wav, PathBuf::from("out/ui/toggle-on.wav"));
        assert_eq!(target, PathBuf::from("out/ui/toggle-on.mp3"));
    }

    #[test]
    fn generate_sound_writes_placeholder() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let strategy = Strategy::Placeholder(FallbackReason::Disabled);

        let artifact = generate_sound(
            &SoundSpec::new("button-click-1", 0.05, 800.0),
            "ui",
            &dir.path().join("ui"),
            &config,
            &strategy,
        )
        .unwrap();

        assert_eq!(artifact.sample_count, 2205);
        assert_eq!(artifact.category, "ui");
        assert_eq!(
            artifact.outcome,
            ArtifactOutcome::Fallback {
                path: dir.path().join("ui").join("button-click-1.wav"),
                reason: FallbackReason::Disabled,
            }
        );
        assert!(artifact.outcome.path().exists());
    }

    #[test]
    fn generate_sound_rejects_invalid_spec() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let strategy = Strategy::Placeholder(FallbackReason::Disabled);

        let err = generate_sound(
            &SoundSpec::new("broken", 0.0, 440.0),
            "ui",
            dir.path(),
            &config,
            &strategy,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSpecification);
        assert!(!dir.path().join("broken.wav").exists());
    }

    #[test]
    fn generate_manifest_reports_progress_in_order() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let strategy = Strategy::Placeholder(FallbackReason::Disabled);

        let mut events = Vec::new();
        let summary = generate_manifest(&small_manifest(), &config, &strategy, |event| {
            events.push(match event {
                ProgressEvent::CategoryStarted { category } => format!("category:{}", category.name),
                ProgressEvent::ArtifactFinished { artifact } => format!("file:{}", artifact.name),
            });
        })
        .unwrap();

        assert_eq!(
            events,
            [
                "category:ui",
                "file:button-click-1",
                "file:hover-tick",
                "category:gameplay",
                "file:battle-hit",
            ]
        );
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.placeholders(), 3);
        assert!(!summary.encoder_available);
    }

    #[test]
    fn generate_manifest_creates_empty_categories() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let manifest = Manifest {
            categories: vec![Category {
                name: "music".to_string(),
                sounds: Vec::new(),
            }],
        };

        let summary = generate_manifest(
            &manifest,
            &config,
            &Strategy::Placeholder(FallbackReason::Disabled),
            |_| {},
        )
        .unwrap();

        assert_eq!(summary.total(), 0);
        assert!(dir.path().join("music").is_dir());
    }

    #[test]
    fn verify_accepts_fresh_placeholders() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let strategy = Strategy::Placeholder(FallbackReason::Disabled);

        let summary = generate_manifest(&small_manifest(), &config, &strategy, |_| {}).unwrap();
        verify_placeholders(&summary, config.sample_rate).unwrap();
    }

    #[test]
    fn verify_rejects_wrong_rate_and_length() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let strategy = Strategy::Placeholder(FallbackReason::Disabled);
        let summary = generate_manifest(&small_manifest(), &config, &strategy, |_| {}).unwrap();

        let err = verify_placeholders(&summary, 22050).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutputWriteFailed);
        assert!(err.message.contains("44100 Hz, expected 22050"));

        let tick = dir.path().join("ui").join("hover-tick.wav");
        write_wav(&[0; 10], &tick, config.sample_rate).unwrap();
        let err = verify_placeholders(&summary, config.sample_rate).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutputWriteFailed);
        assert!(err.message.contains("hover-tick.wav"));
        assert!(err.message.contains("10 samples, expected 1323"));
    }
}
