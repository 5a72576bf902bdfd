//! SoundSpec type describing one requested placeholder sound.

use serde::{Deserialize, Serialize};

/// A named request for a synthetic tone.
///
/// Sound specs are static configuration: defined once when the manifest is
/// built or loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSpec {
    /// File stem of the artifact, e.g. `button-click-1`.
    /// Must not contain path separators.
    pub name: String,

    /// Length of the tone in seconds. Must be finite and > 0.
    pub duration_sec: f64,

    /// Tone frequency in Hz. Must be finite and > 0.
    pub frequency_hz: f64,
}

impl SoundSpec {
    /// Creates a new SoundSpec.
    pub fn new(name: impl Into<String>, duration_sec: f64, frequency_hz: f64) -> Self {
        Self {
            name: name.into(),
            duration_sec,
            frequency_hz,
        }
    }

    /// Validates that the sound meets all constraints.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if let Some(reason) = validate_file_stem(&self.name) {
            return Some(format!("sound name {:?}: {}", self.name, reason));
        }

        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Some(format!(
                "sound {:?}: duration_sec must be finite and positive, got {}",
                self.name, self.duration_sec
            ));
        }

        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Some(format!(
                "sound {:?}: frequency_hz must be finite and positive, got {}",
                self.name, self.frequency_hz
            ));
        }

        None
    }
}

/// Checks that a name can be used as a single path component.
///
/// Shared by sound names and category names, both of which end up as
/// components under the output directory.
pub(crate) fn validate_file_stem(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("name cannot be empty".to_string());
    }

    if name == "." || name == ".." {
        return Some("name cannot be a relative path component".to_string());
    }

    if name.contains(['/', '\\']) || name.contains('\0') {
        return Some("name cannot contain path separators".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_spec() {
        let spec = SoundSpec::new("button-click-1", 0.05, 800.0);
        assert!(spec.validate().is_none());
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(SoundSpec::new("a", 0.0, 440.0).validate().is_some());
        assert!(SoundSpec::new("a", -0.1, 440.0).validate().is_some());
        assert!(SoundSpec::new("a", f64::NAN, 440.0).validate().is_some());
        assert!(SoundSpec::new("a", 0.1, 0.0).validate().is_some());
        assert!(SoundSpec::new("a", 0.1, f64::INFINITY).validate().is_some());
    }

    #[test]
    fn rejects_path_like_names() {
        assert!(SoundSpec::new("", 0.1, 440.0).validate().is_some());
        assert!(SoundSpec::new("..", 0.1, 440.0).validate().is_some());
        assert!(SoundSpec::new("ui/click", 0.1, 440.0).validate().is_some());
        assert!(SoundSpec::new("ui\\click", 0.1, 440.0).validate().is_some());
    }

    #[test]
    fn deserializes_from_json() {
        let spec: SoundSpec =
            serde_json::from_str(r#"{"name":"hover-tick","duration_sec":0.03,"frequency_hz":1200}"#)
                .unwrap();
        assert_eq!(spec, SoundSpec::new("hover-tick", 0.03, 1200.0));
    }
}
