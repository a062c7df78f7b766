// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Vitrine";

/// Autoplay advance period used when the config does not override it.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Directory to build the slide deck from. Falls back to the embedded
    /// demo deck when unset.
    #[serde(default)]
    pub slide_dir: Option<PathBuf>,
    /// Autoplay advance period in milliseconds.
    #[serde(default)]
    pub autoplay_interval_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            slide_dir: None,
            autoplay_interval_ms: Some(DEFAULT_AUTOPLAY_INTERVAL_MS),
        }
    }
}

impl Config {
    /// Returns the effective autoplay interval, clamped to a sane minimum so a
    /// persisted config cannot request a zero-length timer period.
    pub fn autoplay_interval(&self) -> std::time::Duration {
        let ms = self
            .autoplay_interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .max(100);
        std::time::Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            slide_dir: Some(PathBuf::from("/srv/slides")),
            autoplay_interval_ms: Some(3000),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.slide_dir, config.slide_dir);
        assert_eq!(loaded.autoplay_interval_ms, config.autoplay_interval_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_autoplay_interval() {
        let config = Config::default();
        assert_eq!(
            config.autoplay_interval_ms,
            Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
        assert_eq!(config.autoplay_interval(), Duration::from_millis(5000));
    }

    #[test]
    fn autoplay_interval_clamps_zero_to_minimum() {
        let config = Config {
            autoplay_interval_ms: Some(0),
            ..Config::default()
        };
        assert_eq!(config.autoplay_interval(), Duration::from_millis(100));
    }
}
