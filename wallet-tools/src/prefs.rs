//! Persisted user preferences
//!
//! The application remembers four things between sessions: theme, language,
//! the last tool visited, and whether the privacy notice was acknowledged.
//! They are stored as one flat JSON object at a caller-supplied path with no
//! schema versioning; unknown fields are ignored and a missing or unreadable
//! file falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

/// The tools a user can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    #[default]
    MnemonicGenerator,
    Universal,
    CosmosConverter,
}

/// User preferences, persisted between sessions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
    pub last_tool: Tool,
    pub privacy_acknowledged: bool,
}

impl Preferences {
    /// Load preferences from `path`, falling back to defaults
    ///
    /// A missing file is the first-run case; a corrupt one is logged and
    /// replaced by defaults on the next save.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring corrupt preferences file");
                Self::default()
            }
        }
    }

    /// Save preferences to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;

        fs::write(path.as_ref(), json)
            .map_err(|e| Error::Serialization(format!("failed to write preferences: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let prefs = Preferences::load("/nonexistent/prefs.json");
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.last_tool, Tool::MnemonicGenerator);
        assert!(!prefs.privacy_acknowledged);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = Preferences {
            theme: Theme::Dark,
            language: Language::Vi,
            last_tool: Tool::CosmosConverter,
            privacy_acknowledged: true,
        };

        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        fs::write(
            &path,
            r#"{"theme":"dark","futureSetting":42,"lastTool":"universal"}"#,
        )
        .unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.last_tool, Tool::Universal);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        fs::write(&path, "{not json").unwrap();
        assert_eq!(Preferences::load(&path), Preferences::default());
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["language"], "en");
        assert_eq!(json["lastTool"], "mnemonic-generator");
        assert_eq!(json["privacyAcknowledged"], false);
    }
}
