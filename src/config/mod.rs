// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[showcase]` - Rotation timing for the animated sections
//!
//! # Path Resolution
//!
//! The config location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `QRS_LANDING_CONFIG_DIR` environment variable
//! 3. Falls back to the platform config directory via `dirs`
//!
//! Loading never fails the application: a broken file degrades to defaults
//! plus a warning key the settings screen can display.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config dir.
const APP_DIR: &str = "QrsLanding";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "QRS_LANDING_CONFIG_DIR";

/// Fluent key surfaced when the config file exists but cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "settings-config-load-warning";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Timing for the rotating showcase sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseConfig {
    /// Automatic advance interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Transition window in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            interval_ms: Some(DEFAULT_ROTATION_INTERVAL_MS),
            transition_ms: Some(DEFAULT_TRANSITION_MS),
        }
    }
}

impl ShowcaseConfig {
    /// Interval clamped to the supported range, so a hand-edited config
    /// cannot request a nonsensical cadence.
    pub fn interval(&self) -> Duration {
        let ms = self
            .interval_ms
            .unwrap_or(DEFAULT_ROTATION_INTERVAL_MS)
            .clamp(MIN_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Transition clamped to `[0, MAX_TRANSITION_MS]`.
    pub fn transition(&self) -> Duration {
        let ms = self
            .transition_ms
            .unwrap_or(DEFAULT_TRANSITION_MS)
            .min(MAX_TRANSITION_MS);
        Duration::from_millis(ms)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub showcase: ShowcaseConfig,
}

fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns `(config, optional_warning_key)`. A missing file is not a warning;
/// a present-but-broken file returns defaults plus the warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory (tests).
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some(CONFIG_LOAD_WARNING_KEY.to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory (tests).
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
