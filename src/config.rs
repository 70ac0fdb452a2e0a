// SPDX-License-Identifier: GPL-3.0-only

use crate::capture_view::{CaptureMode, GestureKind};
use crate::constants::simulated::DEFAULT_CAMERA_COUNT;
use crate::errors::AppResult;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Capture mode the view starts in
    pub capture_mode: CaptureMode,
    /// Single tap focuses on the tapped point
    pub tap_to_focus: bool,
    /// Double tap meters exposure on the tapped point
    pub tap_to_expose: bool,
    /// Two-finger double tap resets focus and exposure
    pub tap_to_reset: bool,
    /// Mirror camera preview horizontally (selfie mode)
    pub mirror_preview: bool,
    /// Number of simulated camera devices
    pub simulated_cameras: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            capture_mode: CaptureMode::default(),
            tap_to_focus: true,
            tap_to_expose: true,
            tap_to_reset: true,
            mirror_preview: false,
            simulated_cameras: DEFAULT_CAMERA_COUNT,
        }
    }
}

impl Config {
    /// Whether the given tap gesture is enabled in this config
    pub fn tap_enabled(&self, kind: GestureKind) -> bool {
        match kind {
            GestureKind::Focus => self.tap_to_focus,
            GestureKind::Expose => self.tap_to_expose,
            GestureKind::Reset => self.tap_to_reset,
        }
    }

    /// Tap toggles in the order they have to be applied to a capture view
    ///
    /// Reset comes last: enabling focus or expose turns reset on, so it has
    /// to be set after them for its configured value to stick.
    pub fn tap_settings(&self) -> [(GestureKind, bool); 3] {
        [GestureKind::Focus, GestureKind::Expose, GestureKind::Reset]
            .map(|kind| (kind, self.tap_enabled(kind)))
    }

    /// Apply command line overrides on top of the loaded values
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(mode) = overrides.capture_mode {
            self.capture_mode = mode;
        }
        if let Some(cameras) = overrides.simulated_cameras {
            self.simulated_cameras = cameras;
        }
        if overrides.no_tap_to_focus {
            self.tap_to_focus = false;
        }
        if overrides.no_tap_to_expose {
            self.tap_to_expose = false;
        }
        if overrides.no_tap_to_reset {
            self.tap_to_reset = false;
        }
    }

    /// Effective configuration as pretty-printed JSON
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load the persisted configuration, falling back to defaults
    ///
    /// Returns the handler alongside so changes can be written back.
    pub fn load(app_id: &str) -> (Option<cosmic_config::Config>, Config) {
        match cosmic_config::Config::new(app_id, Config::VERSION) {
            Ok(handler) => {
                let config = match Config::get_entry(&handler) {
                    Ok(config) => config,
                    Err((errors, config)) => {
                        tracing::error!(?errors, "Errors loading config");
                        config
                    }
                };
                (Some(handler), config)
            }
            Err(err) => {
                tracing::error!(%err, "Failed to create config handler");
                (None, Config::default())
            }
        }
    }
}

/// Values given on the command line that take precedence over the config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub capture_mode: Option<CaptureMode>,
    pub simulated_cameras: Option<usize>,
    pub no_tap_to_focus: bool,
    pub no_tap_to_expose: bool,
    pub no_tap_to_reset: bool,
}

/// Persisted configuration with the command line overrides layered on top
///
/// The view runs on the effective values. Only the stored values are ever
/// written back, so overrides never leak into the user's config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayeredConfig {
    stored: Config,
    overrides: ConfigOverrides,
    effective: Config,
}

impl LayeredConfig {
    pub fn new(stored: Config, overrides: ConfigOverrides) -> Self {
        let mut effective = stored.clone();
        effective.apply(&overrides);
        Self {
            stored,
            overrides,
            effective,
        }
    }

    /// Values as loaded from (and written to) disk
    pub fn stored(&self) -> &Config {
        &self.stored
    }

    /// Stored values with the overrides applied
    pub fn effective(&self) -> &Config {
        &self.effective
    }

    /// Replace the stored values after an on-disk change, keeping overrides
    pub fn replace_stored(&mut self, stored: Config) {
        *self = Self::new(stored, std::mem::take(&mut self.overrides));
    }

    /// Record a capture mode chosen at runtime
    ///
    /// The choice supersedes a `--mode` override. Returns the stored config
    /// to write back.
    pub fn set_capture_mode(&mut self, mode: CaptureMode) -> &Config {
        self.overrides.capture_mode = None;
        self.stored.capture_mode = mode;
        self.effective.capture_mode = mode;
        &self.stored
    }
}
