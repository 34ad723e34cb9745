// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config, StylePreset};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.style = Some(StylePreset::Mars);
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
//! assert_eq!(loaded_config.style, Some(StylePreset::Mars));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
pub use crate::toast::StylePreset;

use crate::toast::{AnimationDuration, Deadline, Settings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Slide animation duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_ms: Option<u64>,
    /// Auto-dismiss deadline in seconds, `0` keeps toasts on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_dismiss_secs: Option<f64>,
    /// Pause before the next queued toast enters, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StylePreset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_duration_ms: Some(DEFAULT_ANIMATION_DURATION_MS),
            auto_dismiss_secs: Some(DEFAULT_DEADLINE_SECS),
            settle_delay_ms: Some(DEFAULT_SETTLE_DELAY_MS),
            style: Some(StylePreset::default()),
        }
    }
}

impl Config {
    /// Resolves the scheduler settings, clamping every value to its valid range.
    #[must_use]
    pub fn toaster_settings(&self) -> Settings {
        let settle_ms = self
            .settle_delay_ms
            .unwrap_or(DEFAULT_SETTLE_DELAY_MS)
            .min(MAX_SETTLE_DELAY_MS);

        Settings {
            animation_duration: self
                .animation_duration_ms
                .map(|ms| ms.clamp(MIN_ANIMATION_DURATION_MS, MAX_ANIMATION_DURATION_MS))
                .map(AnimationDuration::from_millis)
                .unwrap_or_default(),
            deadline: self
                .auto_dismiss_secs
                .map(|secs| Deadline::from_secs_f64(secs.min(MAX_DEADLINE_SECS)))
                .unwrap_or_default(),
            settle_delay: Duration::from_millis(settle_ms),
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

/// Reads the settings file, falling back to defaults when it does not parse.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "invalid settings, using defaults"
            );
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
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}
