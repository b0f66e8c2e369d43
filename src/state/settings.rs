use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV: &str = "MEMEFLOW_SETTINGS";

pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User configuration, stored as JSON
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Prefix for share links (`<origin>/meme/<id>`)
    pub share_origin: String,
    /// Feed file to browse instead of the built-in samples
    pub feed_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            share_origin: String::from(DEFAULT_SHARE_ORIGIN),
            feed_path: None,
        }
    }
}

impl Settings {
    /// Load settings from the user's config directory.
    ///
    /// Never fails: a missing file means defaults, a broken one is logged
    /// and replaced by defaults.
    /// - Linux: ~/.config/memeflow/settings.json
    /// - macOS: ~/Library/Application Support/memeflow/settings.json
    /// - Windows: %APPDATA%\memeflow\settings.json
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("could not determine a config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring settings file");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the path where the settings file should live
    fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("memeflow");
        path.push("settings.json");
        Some(path)
    }
}
