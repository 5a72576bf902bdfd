//! Manifest of placeholder sounds grouped by category.
//!
//! The built-in manifest is a constant table. A JSON file with the same shape
//! can replace it; loaded manifests are validated before use since they are
//! not trusted the way the embedded table is.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, GenError, Result};

use super::sound::{validate_file_stem, SoundSpec};

/// Built-in sound table: (category, [(name, duration_sec, frequency_hz)]).
const BUILTIN: &[(&str, &[(&str, f64, f64)])] = &[
    (
        "ui",
        &[
            ("button-click-1", 0.05, 800.0),
            ("button-click-2", 0.05, 900.0),
            ("button-click-3", 0.05, 1000.0),
            ("hover-tick", 0.03, 1200.0),
            ("panel-open", 0.2, 600.0),
            ("panel-close", 0.2, 500.0),
            ("toggle-on", 0.1, 1000.0),
            ("toggle-off", 0.1, 800.0),
            ("tab-change", 0.08, 1100.0),
            ("success-1", 0.4, 800.0),
            ("success-2", 0.4, 900.0),
            ("success-3", 0.4, 1000.0),
            ("error-soft", 0.3, 400.0),
            ("notification-ping", 0.2, 1500.0),
        ],
    ),
    (
        "avatar",
        &[
            ("idle-1", 0.5, 440.0),
            ("idle-2", 0.5, 550.0),
            ("idle-3", 0.5, 660.0),
            ("william-tap", 0.05, 1000.0),
            ("confetti-sneeze", 1.0, 700.0),
            ("banana-slip", 1.0, 300.0),
            ("bubble-burp", 0.6, 200.0),
            ("pie-trap", 0.8, 500.0),
            ("rubber-chicken", 0.6, 800.0),
            ("hero-landing", 0.8, 600.0),
            ("endless-scarf", 0.6, 900.0),
            ("frog-crown", 0.8, 400.0),
            ("chipmunk-voice", 0.7, 1200.0),
            ("marshmallow-volley", 0.8, 700.0),
            ("hair-tornado", 1.0, 350.0),
            ("tiger-shuffle", 1.0, 500.0),
            ("lego-step", 0.5, 1100.0),
            ("goose-chase", 1.2, 600.0),
            ("treasure-socks", 1.0, 800.0),
            ("william-on-break", 2.0, 440.0),
        ],
    ),
    (
        "weather",
        &[
            ("sunny-ambient", 3.0, 300.0),
            ("cloudy-ambient", 3.0, 250.0),
            ("rain-ambient", 3.0, 200.0),
            ("storm-ambient", 3.0, 150.0),
            ("snow-ambient", 3.0, 280.0),
        ],
    ),
    (
        "music",
        &[
            ("hub-loop", 4.0, 440.0),
            ("forest-loop", 4.0, 392.0),
            ("dungeon-loop", 4.0, 330.0),
        ],
    ),
    ("gameplay", &[("battle-hit", 0.4, 560.0)]),
];

/// An ordered group of sounds written to one output subdirectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Subdirectory name under the output directory.
    pub name: String,
    /// Sounds in generation order.
    pub sounds: Vec<SoundSpec>,
}

/// Mapping from category name to an ordered sequence of sounds.
///
/// Stored as a vector so category order is stable and matches the source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub categories: Vec<Category>,
}

impl Manifest {
    /// Returns the embedded manifest of placeholder sounds.
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, sounds)| Category {
                name: (*name).to_string(),
                sounds: sounds
                    .iter()
                    .map(|(sound, duration, freq)| SoundSpec::new(*sound, *duration, *freq))
                    .collect(),
            })
            .collect();

        Self { categories }
    }

    /// Parses and validates a manifest from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json).map_err(|e| {
            GenError::with_source(
                ErrorCode::InvalidManifest,
                "Invalid manifest: could not parse JSON",
                e,
            )
        })?;

        if let Some(reason) = manifest.validate() {
            return Err(GenError::invalid_manifest(reason));
        }

        Ok(manifest)
    }

    /// Reads, parses and validates a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            GenError::with_source(
                ErrorCode::InvalidManifest,
                format!("Invalid manifest: could not read {}", path.display()),
                e,
            )
        })?;

        Self::from_json_str(&json)
    }

    /// Validates category and sound entries.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        let mut seen_categories = HashSet::new();

        for category in &self.categories {
            if let Some(reason) = validate_file_stem(&category.name) {
                return Some(format!("category name {:?}: {}", category.name, reason));
            }

            if !seen_categories.insert(category.name.as_str()) {
                return Some(format!("duplicate category {:?}", category.name));
            }

            let mut seen_sounds = HashSet::new();
            for sound in &category.sounds {
                if let Some(reason) = sound.validate() {
                    return Some(format!("category {:?}: {}", category.name, reason));
                }

                if !seen_sounds.insert(sound.name.as_str()) {
                    return Some(format!(
                        "category {:?}: duplicate sound {:?}",
                        category.name, sound.name
                    ));
                }
            }
        }

        None
    }

    /// Returns a manifest containing only the named categories, in manifest order.
    ///
    /// An empty filter keeps every category. Unknown names are an error.
    pub fn filter(&self, names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self.clone());
        }

        if let Some(unknown) = names.iter().find(|n| self.category(n).is_none()) {
            return Err(GenError::invalid_manifest(format!(
                "unknown category {:?}",
                unknown
            )));
        }

        let categories = self
            .categories
            .iter()
            .filter(|c| names.contains(&c.name))
            .cloned()
            .collect();

        Ok(Self { categories })
    }

    /// Looks up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Returns the total number of sounds across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.sounds.len()).sum()
    }

    /// Returns true if the manifest contains no sounds.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
