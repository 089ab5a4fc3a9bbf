// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("ru".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("ru".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::viewer::{SwipeThreshold, ZoomFactor};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GalleryLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub zoom_step: Option<f32>,
    #[serde(default)]
    pub wheel_step: Option<f32>,
    #[serde(default)]
    pub swipe_threshold: Option<f32>,
    #[serde(default)]
    pub placeholder_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            zoom_step: Some(DEFAULT_ZOOM_FACTOR),
            wheel_step: Some(DEFAULT_WHEEL_FACTOR),
            swipe_threshold: Some(DEFAULT_SWIPE_THRESHOLD),
            placeholder_url: None,
        }
    }
}

/// Resolved viewer settings, every value guaranteed valid by its type.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub zoom_step: ZoomFactor,
    pub wheel_step: ZoomFactor,
    pub swipe_threshold: SwipeThreshold,
    pub placeholder_url: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            zoom_step: ZoomFactor::default(),
            wheel_step: ZoomFactor::new(DEFAULT_WHEEL_FACTOR),
            swipe_threshold: SwipeThreshold::default(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
        }
    }
}

impl From<&Config> for ViewerSettings {
    fn from(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            zoom_step: config.zoom_step.map_or(defaults.zoom_step, ZoomFactor::new),
            wheel_step: config
                .wheel_step
                .map_or(defaults.wheel_step, ZoomFactor::new),
            swipe_threshold: config
                .swipe_threshold
                .map_or(defaults.swipe_threshold, SwipeThreshold::new),
            placeholder_url: config
                .placeholder_url
                .clone()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.placeholder_url),
        }
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
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("ru".to_string()),
            zoom_step: Some(1.5),
            wheel_step: Some(1.05),
            swipe_threshold: Some(80.0),
            placeholder_url: Some("img/missing.png".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert_eq!(loaded.zoom_step, Some(DEFAULT_ZOOM_FACTOR));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_leaves_other_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "swipe_threshold = 120.0\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.swipe_threshold, Some(120.0));
        assert!(loaded.zoom_step.is_none());
    }

    #[test]
    fn viewer_settings_clamp_out_of_range_values() {
        let config = Config {
            zoom_step: Some(100.0),
            wheel_step: Some(0.2),
            swipe_threshold: Some(1.0),
            placeholder_url: Some("   ".to_string()),
            ..Config::default()
        };

        let settings = ViewerSettings::from(&config);
        assert_eq!(settings.zoom_step.value(), MAX_ZOOM_FACTOR);
        assert_eq!(settings.wheel_step.value(), MIN_ZOOM_FACTOR);
        assert_eq!(settings.swipe_threshold.value(), MIN_SWIPE_THRESHOLD);
        assert_eq!(settings.placeholder_url, DEFAULT_PLACEHOLDER_URL);
    }

    #[test]
    fn viewer_settings_fall_back_to_defaults_when_unset() {
        let config = Config {
            language: None,
            zoom_step: None,
            wheel_step: None,
            swipe_threshold: None,
            placeholder_url: None,
        };

        assert_eq!(ViewerSettings::from(&config), ViewerSettings::default());
    }
}
