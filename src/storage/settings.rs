//! Settings storage
//!
//! Manages persistence of user preferences and application settings.

use crate::console::filter::{CONTEXT_STEP_K, MAX_CONTEXT_K};
use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Color theme of the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class applied to the root element
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI theme
    #[serde(default)]
    pub theme: Theme,
    /// Show the floating assistant widget
    #[serde(default = "default_chat_enabled")]
    pub chat_enabled: bool,
    /// Simulated assistant response time in milliseconds (0 - 10000)
    #[serde(default = "default_chat_reply_delay_ms")]
    pub chat_reply_delay_ms: u64,
    /// Initial min-context slider position, in thousands of tokens
    #[serde(default)]
    pub default_min_context_k: u64,
}

fn default_chat_enabled() -> bool {
    true
}

fn default_chat_reply_delay_ms() -> u64 {
    1500
}

const MAX_CHAT_REPLY_DELAY_MS: u64 = 10_000;

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            chat_enabled: default_chat_enabled(),
            chat_reply_delay_ms: default_chat_reply_delay_ms(),
            default_min_context_k: 0,
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        self.chat_reply_delay_ms = self.chat_reply_delay_ms.min(MAX_CHAT_REPLY_DELAY_MS);

        // Snap to the slider grid
        let k = self.default_min_context_k.min(MAX_CONTEXT_K);
        self.default_min_context_k = k - k % CONTEXT_STEP_K;
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(settings, &get_settings_path()?)
}

/// Save settings to a specific file, creating parent directories
pub fn save_settings_to(settings: &AppSettings, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.chat_enabled);
        assert_eq!(settings.chat_reply_delay_ms, 1500);
        assert_eq!(settings.default_min_context_k, 0);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.chat_reply_delay_ms = 60_000;
        settings.validate();
        assert_eq!(settings.chat_reply_delay_ms, 10_000);

        settings.default_min_context_k = 125;
        settings.validate();
        assert_eq!(settings.default_min_context_k, 120);

        settings.default_min_context_k = 4000;
        settings.validate();
        assert_eq!(settings.default_min_context_k, 1000);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.chat_enabled);
        assert_eq!(settings.chat_reply_delay_ms, 1500);
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            theme: Theme::Light,
            chat_enabled: false,
            chat_reply_delay_ms: 250,
            default_min_context_k: 200,
        };
        save_settings_to(&settings, &path).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_load_corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(StorageError::Json(_))));
    }
}
