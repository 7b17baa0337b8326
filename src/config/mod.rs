// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Every field is optional so that partial files stay valid; missing values
//! resolve to the constants in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.overlay.allowed_by_default = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::animation::SpringConfig;
use crate::domain::toast::{CategoryTimeouts, DismissTimeout};
use crate::error::Result;
use crate::reconciler::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

/// Geometry of the toast stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub top_inset: Option<f32>,
    pub gap: Option<f32>,
    pub default_height: Option<f32>,
    pub swipe_dismiss_fraction: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub transition_ms: Option<u64>,
    pub spring_bounciness: Option<f32>,
    pub spring_speed: Option<f32>,
}

/// Per-category auto-dismiss overrides, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub success_ms: Option<u64>,
    pub error_ms: Option<u64>,
    pub warning_ms: Option<u64>,
    pub info_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Whether toasts may be presented as soon as the session is created.
    pub allowed_by_default: Option<bool>,
}

impl Config {
    /// Resolves the stack geometry, clamping the swipe fraction to its bounds.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout {
            top_inset: self.layout.top_inset.unwrap_or(DEFAULT_TOP_INSET).max(0.0),
            gap: self.layout.gap.unwrap_or(DEFAULT_TOAST_GAP).max(0.0),
            default_height: self
                .layout
                .default_height
                .filter(|height| *height > 0.0)
                .unwrap_or(DEFAULT_TOAST_HEIGHT),
            screen_width: DEFAULT_SCREEN_WIDTH,
            swipe_dismiss_fraction: self
                .layout
                .swipe_dismiss_fraction
                .unwrap_or(DEFAULT_SWIPE_DISMISS_FRACTION)
                .clamp(MIN_SWIPE_DISMISS_FRACTION, MAX_SWIPE_DISMISS_FRACTION),
        }
    }

    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(
            self.animation
                .transition_ms
                .unwrap_or(DEFAULT_TRANSITION_MS)
                .max(1),
        )
    }

    #[must_use]
    pub fn spring(&self) -> SpringConfig {
        SpringConfig::new(
            self.animation
                .spring_bounciness
                .unwrap_or(DEFAULT_SPRING_BOUNCINESS),
            self.animation.spring_speed.unwrap_or(DEFAULT_SPRING_SPEED),
        )
    }

    #[must_use]
    pub fn category_timeouts(&self) -> CategoryTimeouts {
        let defaults = CategoryTimeouts::default();
        CategoryTimeouts {
            success: self
                .timeouts
                .success_ms
                .map_or(defaults.success, clamped_timeout),
            error: self
                .timeouts
                .error_ms
                .map_or(defaults.error, clamped_timeout),
            warning: self
                .timeouts
                .warning_ms
                .map_or(defaults.warning, clamped_timeout),
            info: self
                .timeouts
                .info_ms
                .map_or(defaults.info, clamped_timeout),
        }
    }

    #[must_use]
    pub fn allowed_by_default(&self) -> bool {
        self.overlay.allowed_by_default.unwrap_or(false)
    }
}

fn clamped_timeout(millis: u64) -> Duration {
    DismissTimeout::from_millis(millis).as_duration()
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

/// Reads a config file. Malformed TOML falls back to the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring malformed settings file");
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
