//! User settings (`~/.config/lastbible/settings.toml`).
//!
//! ```toml
//! [output]
//! default_format = "html"
//! assume_yes = false
//! ```
//!
//! A missing file or missing keys fall back to the defaults. Command-line
//! flags take precedence over anything set here.

use std::path::PathBuf;

use serde::Deserialize;

use lastbible_report::OutputFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct OutputSettings {
    /// Format used when neither `--format` nor the output extension picks one
    pub default_format: OutputFormat,
    /// Overwrite existing output files without asking
    pub assume_yes: bool,
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("lastbible").join("settings.toml")
}

impl Settings {
    /// Load the settings file, falling back to defaults when it is missing
    /// or cannot be parsed.
    pub(crate) fn load() -> Self {
        let path = settings_path();
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::parse(&contents) {
            Ok(settings) => {
                log::debug!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub(crate) fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
