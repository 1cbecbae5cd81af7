// SPDX-License-Identifier: MPL-2.0
//! This module handles the gesture configuration, including loading and saving
//! user overrides to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Make swipes a little harder to trigger
//! config.swipe_distance_px = Some(80.0);
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
//! assert_eq!(loaded_config.swipe_distance_px, Some(80.0));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::gesture::{AxisDominance, GestureThresholds, SwipeDistance, WheelDistance};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub swipe_distance_px: Option<f32>,
    #[serde(default)]
    pub wheel_distance: Option<f32>,
    #[serde(default)]
    pub axis_dominance: Option<f32>,
    #[serde(default)]
    pub wheel_window_ms: Option<u64>,
    #[serde(default)]
    pub wheel_cooldown_ms: Option<u64>,
    #[serde(default)]
    pub wheel_decay_ms: Option<u64>,
    #[serde(default)]
    pub wheel_line_height_px: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swipe_distance_px: Some(DEFAULT_SWIPE_DISTANCE_PX),
            wheel_distance: Some(DEFAULT_WHEEL_DISTANCE),
            axis_dominance: Some(DEFAULT_AXIS_DOMINANCE),
            wheel_window_ms: Some(DEFAULT_WHEEL_WINDOW_MS),
            wheel_cooldown_ms: Some(DEFAULT_WHEEL_COOLDOWN_MS),
            wheel_decay_ms: Some(DEFAULT_WHEEL_DECAY_MS),
            wheel_line_height_px: Some(DEFAULT_WHEEL_LINE_HEIGHT_PX),
        }
    }
}

impl Config {
    /// Resolves the optional overrides into a validated threshold set.
    ///
    /// The decay window never ends before the cooldown window.
    #[must_use]
    pub fn thresholds(&self) -> GestureThresholds {
        let window_ms = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default).min(MAX_WHEEL_WINDOW_MS))
        };

        let wheel_cooldown = window_ms(self.wheel_cooldown_ms, DEFAULT_WHEEL_COOLDOWN_MS);
        let wheel_decay =
            window_ms(self.wheel_decay_ms, DEFAULT_WHEEL_DECAY_MS).max(wheel_cooldown);

        GestureThresholds {
            swipe_distance: SwipeDistance::new(
                self.swipe_distance_px.unwrap_or(DEFAULT_SWIPE_DISTANCE_PX),
            ),
            wheel_distance: WheelDistance::new(
                self.wheel_distance.unwrap_or(DEFAULT_WHEEL_DISTANCE),
            ),
            axis_dominance: AxisDominance::new(
                self.axis_dominance.unwrap_or(DEFAULT_AXIS_DOMINANCE),
            ),
            wheel_window: window_ms(self.wheel_window_ms, DEFAULT_WHEEL_WINDOW_MS),
            wheel_cooldown,
            wheel_decay,
            momentum_growth: MOMENTUM_GROWTH_RATIO,
        }
    }

    /// Pixels per wheel line, falling back to the default for unusable values.
    #[must_use]
    pub fn wheel_line_height(&self) -> f32 {
        match self.wheel_line_height_px {
            Some(height) if height.is_finite() && height > 0.0 => height,
            _ => DEFAULT_WHEEL_LINE_HEIGHT_PX,
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
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
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
