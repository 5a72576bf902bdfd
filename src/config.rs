//! Generator configuration module.
//!
//! Contains the runtime configuration for placeholder-audio, including the
//! output location, sample format, waveform and encoder settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::audio::{Waveform, SAMPLE_RATE, WAV_EXTENSION};
use crate::transcode::EncoderSettings;

/// Default base directory for generated sounds.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/audio";

/// Runtime configuration for a generation run.
///
/// Built from defaults, then environment variables, then command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base directory; one subdirectory per category is created beneath it.
    pub output_dir: PathBuf,

    /// Output sample rate in Hz.
    pub sample_rate: u32,

    /// Content generated for each sound.
    pub waveform: Waveform,

    /// Whether to attempt transcoding at all.
    pub transcode: bool,

    /// External encoder settings.
    pub encoder: EncoderSettings,
}

impl GeneratorConfig {
    /// Creates a new GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a GeneratorConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `PLACEHOLDER_AUDIO_OUTPUT_DIR` - Base output directory
    /// - `PLACEHOLDER_AUDIO_SAMPLE_RATE` - Sample rate in Hz
    /// - `PLACEHOLDER_AUDIO_WAVEFORM` - beep or silence
    /// - `PLACEHOLDER_AUDIO_NO_TRANSCODE` - Set to 1/true to skip the encoder
    /// - `PLACEHOLDER_AUDIO_ENCODER` - Encoder program or path
    /// - `PLACEHOLDER_AUDIO_CODEC` - Encoder audio codec
    /// - `PLACEHOLDER_AUDIO_QUALITY` - Encoder quality (0-9)
    /// - `PLACEHOLDER_AUDIO_EXTENSION` - Compressed file extension
    ///
    /// Falls back to defaults for unset or unparseable variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("PLACEHOLDER_AUDIO_OUTPUT_DIR") {
            if !path.is_empty() {
                config.output_dir = PathBuf::from(path);
            }
        }

        if let Some(rate) = lookup("PLACEHOLDER_AUDIO_SAMPLE_RATE") {
            if let Ok(rate) = rate.trim().parse::<u32>() {
                config.sample_rate = rate;
            }
        }

        if let Some(waveform) = lookup("PLACEHOLDER_AUDIO_WAVEFORM") {
            if let Some(waveform) = Waveform::parse(waveform.trim()) {
                config.waveform = waveform;
            }
        }

        if let Some(flag) = lookup("PLACEHOLDER_AUDIO_NO_TRANSCODE") {
            if matches!(flag.trim().to_lowercase().as_str(), "1" | "true" | "yes") {
                config.transcode = false;
            }
        }

        if let Some(program) = lookup("PLACEHOLDER_AUDIO_ENCODER") {
            if !program.trim().is_empty() {
                config.encoder.program = program.trim().to_string();
            }
        }

        if let Some(codec) = lookup("PLACEHOLDER_AUDIO_CODEC") {
            if !codec.trim().is_empty() {
                config.encoder.codec = codec.trim().to_string();
            }
        }

        if let Some(quality) = lookup("PLACEHOLDER_AUDIO_QUALITY") {
            if let Ok(quality) = quality.trim().parse::<u8>() {
                config.encoder.quality = quality;
            }
        }

        if let Some(extension) = lookup("PLACEHOLDER_AUDIO_EXTENSION") {
            let extension = extension.trim().trim_start_matches('.');
            if !extension.is_empty() {
                config.encoder.extension = extension.to_lowercase();
            }
        }

        config
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if !(8000..=192_000).contains(&self.sample_rate) {
            return Some(format!(
                "sample_rate must be between 8000 and 192000, got {}",
                self.sample_rate
            ));
        }

        if self.encoder.program.trim().is_empty() {
            return Some("encoder program cannot be empty".to_string());
        }

        if self.encoder.codec.trim().is_empty() {
            return Some("encoder codec cannot be empty".to_string());
        }

        if self.encoder.quality > 9 {
            return Some(format!(
                "encoder quality must be 0-9, got {}",
                self.encoder.quality
            ));
        }

        let ext = &self.encoder.extension;
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Some(format!(
                "extension must be non-empty and alphanumeric, got {:?}",
                ext
            ));
        }

        // The WAV intermediate doubles as the placeholder path.
        if ext.eq_ignore_ascii_case(WAV_EXTENSION) {
            return Some("extension cannot be wav (used for placeholders)".to_string());
        }

        None
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sample_rate: SAMPLE_RATE,
            waveform: Waveform::Beep,
            transcode: true,
            encoder: EncoderSettings::default(),
        }
    }
}
