//! Pipeline settings (directory layout, debug diagnostics).
//!
//! The pipeline is a fixed batch job: every setting has a built-in default and
//! the only override point is `~/.config/sdv-data/settings.toml`. There are no
//! command-line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Directory layout and diagnostics toggle for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the raw export
    pub root_dir: PathBuf,
    /// Subdirectory of `root_dir` holding the string tables
    pub strings_dir: String,
    /// Subdirectory of `root_dir` holding the data files
    pub data_dir: String,
    /// Where the normalized dataset is written
    pub output_dir: PathBuf,
    /// Appended to every input name, e.g. `Objects` → `Objects.escaped.json`
    pub file_suffix: String,
    /// Log every normalized record and a property census per data file
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("../../raw-data-escaped"),
            strings_dir: "Strings".to_string(),
            data_dir: "Data".to_string(),
            output_dir: PathBuf::from("../../output-data"),
            file_suffix: ".escaped.json".to_string(),
            debug: false,
        }
    }
}

impl Settings {
    /// Path of a raw input file, e.g. `("Data", "TV/CookingChannel")`.
    pub fn input_path(&self, dir: &str, name: &str) -> PathBuf {
        self.root_dir
            .join(dir)
            .join(format!("{name}{}", self.file_suffix))
    }

    /// Path of an output collection, e.g. `objects` → `<output_dir>/objects.json`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.json"))
    }
}

/// Canonical path to the settings file: `~/.config/sdv-data/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("sdv-data").join("settings.toml")
}

/// Load settings from the canonical path, falling back to defaults when the
/// file does not exist.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

/// Load settings from an explicit path. Missing keys take their defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| SettingsError::Toml {
        path: path.display().to_string(),
        source: e,
    })
}
