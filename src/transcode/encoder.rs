//! External encoder invocation.
//!
//! Wraps an ffmpeg-compatible binary. The encoder is a black box: it either
//! exits successfully having written the output file, or it does not.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Settings for the external encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderSettings {
    /// Program name (looked up on PATH) or path to the encoder binary.
    pub program: String,

    /// Audio codec passed as `-c:a`.
    pub codec: String,

    /// VBR quality passed as `-q:a` (0 = best, 9 = smallest).
    pub quality: u8,

    /// Extension of the compressed artifact, without the dot.
    pub extension: String,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            codec: "libmp3lame".to_string(),
            quality: 4,
            extension: "mp3".to_string(),
        }
    }
}

/// A probed, working encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder {
    program: PathBuf,
    settings: EncoderSettings,
}

impl Encoder {
    /// Locates the encoder and checks that it answers `-version`.
    ///
    /// Fails with ENCODER_UNAVAILABLE if the binary is missing, cannot be
    /// started, or exits with a failure status.
    pub fn probe(settings: &EncoderSettings) -> Result<Self> {
        let program = which::which(&settings.program).map_err(|e| {
            GenError::encoder_unavailable(format!("{} ({})", settings.program, e))
        })?;

        let status = Command::new(&program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                GenError::encoder_unavailable(format!(
                    "{} could not be started ({})",
                    program.display(),
                    e
                ))
            })?;

        if !status.success() {
            return Err(GenError::encoder_unavailable(format!(
                "{} -version exited with {}",
                program.display(),
                status
            )));
        }

        tracing::info!(program = %program.display(), "encoder available");
        Ok(Self {
            program,
            settings: settings.clone(),
        })
    }

    /// Returns the resolved encoder binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the settings this encoder was probed with.
    pub fn settings(&self) -> &EncoderSettings {
        &self.settings
    }

    /// Builds the encoder argument list.
    ///
    /// `-y` goes first so it applies to the output file; ffmpeg ignores
    /// trailing options.
    pub fn command_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-y".into(),
            "-i".into(),
            input.as_os_str().to_owned(),
            "-c:a".into(),
            self.settings.codec.clone().into(),
            "-q:a".into(),
            self.settings.quality.to_string().into(),
            output.as_os_str().to_owned(),
        ]
    }

    /// Runs the encoder and waits for it to finish.
    pub fn transcode(&self, input: &Path, output: &Path) -> Result<()> {
        tracing::debug!(
            program = %self.program.display(),
            input = %input.display(),
            output = %output.display(),
            "transcoding"
        );

        let result = Command::new(&self.program)
            .args(self.command_args(input, output))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                GenError::encoder_failed(format!(
                    "could not start {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let detail = stderr.trim().lines().last().unwrap_or("").trim();
            return Err(GenError::encoder_failed(if detail.is_empty() {
                format!("{} exited with {}", self.program.display(), result.status)
            } else {
                format!(
                    "{} exited with {}: {}",
                    self.program.display(),
                    result.status,
                    detail
                )
            }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn default_settings() {
        let settings = EncoderSettings::default();
        assert_eq!(settings.program, "ffmpeg");
        assert_eq!(settings.codec, "libmp3lame");
        assert_eq!(settings.quality, 4);
        assert_eq!(settings.extension, "mp3");
    }

    #[test]
    fn probe_missing_program() {
        let settings = EncoderSettings {
            program: "placeholder-audio-no-such-encoder".to_string(),
            ..Default::default()
        };
        let err = Encoder::probe(&settings).unwrap_err();
        assert_eq!(err.code, ErrorCode::EncoderUnavailable);
        assert!(err.message.contains("placeholder-audio-no-such-encoder"));
    }

    #[test]
    fn command_args_match_ffmpeg_convention() {
        let encoder = Encoder {
            program: PathBuf::from("/usr/bin/ffmpeg"),
            settings: EncoderSettings::default(),
        };
        let args = encoder.command_args(Path::new("ui/click.wav"), Path::new("ui/click.mp3"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            [
                "-y",
                "-i",
                "ui/click.wav",
                "-c:a",
                "libmp3lame",
                "-q:a",
                "4",
                "ui/click.mp3"
            ]
        );
    }
}
