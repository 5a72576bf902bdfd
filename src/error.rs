//! Error types for placeholder-audio.
//!
//! Defines the error codes and the error type used throughout the crate for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes attached to every [`GenError`].
///
/// Encoder codes never abort a run: the transcode step downgrades them to a
/// placeholder artifact. The remaining codes are fatal for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A sound request has a bad name, duration or frequency.
    /// Trigger: non-finite or non-positive duration/frequency, zero sample rate.
    InvalidSpecification,

    /// A manifest could not be read or failed validation.
    /// Trigger: malformed JSON, duplicate names, unknown category filter.
    InvalidManifest,

    /// Runtime configuration is inconsistent.
    /// Trigger: sample rate out of range, empty encoder program.
    InvalidConfig,

    /// Writing, renaming or removing an output file failed.
    /// Trigger: unwritable output directory, disk full.
    OutputWriteFailed,

    /// The external encoder could not be found or started.
    EncoderUnavailable,

    /// The external encoder ran and exited with a failure status.
    EncoderFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSpecification => "INVALID_SPECIFICATION",
            ErrorCode::InvalidManifest => "INVALID_MANIFEST",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::OutputWriteFailed => "OUTPUT_WRITE_FAILED",
            ErrorCode::EncoderUnavailable => "ENCODER_UNAVAILABLE",
            ErrorCode::EncoderFailed => "ENCODER_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSpecification => {
                "Sound duration and frequency must be finite and positive"
            }
            ErrorCode::InvalidManifest => "Manifest could not be parsed or contains invalid entries",
            ErrorCode::InvalidConfig => "Generator configuration is invalid",
            ErrorCode::OutputWriteFailed => "Failed to write an audio file to disk",
            ErrorCode::EncoderUnavailable => "External audio encoder not found",
            ErrorCode::EncoderFailed => "External audio encoder exited with an error",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSpecification => {
                "Use a positive duration in seconds and a positive frequency in Hz \
                 (e.g., duration_sec: 0.1, frequency_hz: 440)"
            }
            ErrorCode::InvalidManifest => {
                "Check the manifest JSON: every category needs a unique name and every \
                 sound a unique, path-free name"
            }
            ErrorCode::InvalidConfig => {
                "Check PLACEHOLDER_AUDIO_* environment variables and command-line flags"
            }
            ErrorCode::OutputWriteFailed => {
                "Check that the output directory is writable and the disk has free space"
            }
            ErrorCode::EncoderUnavailable => {
                "Install ffmpeg or pass --encoder with the path to an ffmpeg binary"
            }
            ErrorCode::EncoderFailed => {
                "Check that the encoder supports the requested codec (e.g., libmp3lame)"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generator operations.
#[derive(Debug)]
pub struct GenError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenError {
    /// Creates a new GenError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new GenError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_SPECIFICATION error.
    pub fn invalid_specification(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidSpecification,
            format!("Invalid sound specification: {}", reason.into()),
        )
    }

    /// Creates an INVALID_MANIFEST error.
    pub fn invalid_manifest(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidManifest,
            format!("Invalid manifest: {}", reason.into()),
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfig,
            format!("Invalid configuration: {}", reason.into()),
        )
    }

    /// Creates an OUTPUT_WRITE_FAILED error wrapping the underlying cause.
    pub fn output_write_failed(
        what: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::OutputWriteFailed,
            format!("Failed to {}", what.into()),
            source,
        )
    }

    /// Creates an ENCODER_UNAVAILABLE error.
    pub fn encoder_unavailable(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::EncoderUnavailable,
            format!("Encoder not available: {}", detail.into()),
        )
    }

    /// Creates an ENCODER_FAILED error.
    pub fn encoder_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::EncoderFailed,
            format!("Encoder failed: {}", reason.into()),
        )
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(source) = &self.source {
            write!(f, ": {}", source)?;
        }
        write!(f, ". Recovery: {}", self.code.recovery_hint())
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using GenError.
pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::InvalidSpecification.as_str(), "INVALID_SPECIFICATION");
        assert_eq!(ErrorCode::InvalidManifest.as_str(), "INVALID_MANIFEST");
        assert_eq!(ErrorCode::InvalidConfig.as_str(), "INVALID_CONFIG");
        assert_eq!(ErrorCode::OutputWriteFailed.as_str(), "OUTPUT_WRITE_FAILED");
        assert_eq!(ErrorCode::EncoderUnavailable.as_str(), "ENCODER_UNAVAILABLE");
        assert_eq!(ErrorCode::EncoderFailed.as_str(), "ENCODER_FAILED");
    }

    #[test]
    fn error_code_hints_not_empty() {
        for code in [
            ErrorCode::InvalidSpecification,
            ErrorCode::InvalidManifest,
            ErrorCode::InvalidConfig,
            ErrorCode::OutputWriteFailed,
            ErrorCode::EncoderUnavailable,
            ErrorCode::EncoderFailed,
        ] {
            assert!(!code.recovery_hint().is_empty());
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn gen_error_display() {
        let err = GenError::invalid_specification("duration_sec must be positive, got -1");
        let text = err.to_string();
        assert!(text.contains("INVALID_SPECIFICATION"));
        assert!(text.contains("-1"));
        assert!(text.contains("Recovery:"));
    }

    #[test]
    fn output_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = GenError::output_write_failed("create /nope/a.wav", io);
        assert_eq!(err.code, ErrorCode::OutputWriteFailed);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("read-only"));
    }
}
