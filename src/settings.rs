//! Game settings and preferences
//!
//! Read from an optional JSON file next to the executable. Missing keys fall
//! back to defaults, so `{}` is a valid settings file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT, TARGET_FPS};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,

    // === Simulation ===
    /// Fixed timestep in seconds
    pub fixed_timestep: f32,
    /// Cap on ticks run per rendered frame
    pub max_substeps: u32,

    // === HUD / debug ===
    /// Show fuel, altitude and speed readouts
    pub show_hud: bool,
    /// Outline every collider in green
    pub show_colliders: bool,

    /// Physics constants and mission layout
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Lunar Lander".to_string(),
            window_width: SCREEN_WIDTH as u32,
            window_height: SCREEN_HEIGHT as u32,
            target_fps: TARGET_FPS,

            fixed_timestep: SIM_DT,
            max_substeps: MAX_SUBSTEPS,

            show_hud: true,
            show_colliders: true,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "lander.json";

    /// Parse settings from a JSON string
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_timestep > 0.0 && self.fixed_timestep.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "fixed_timestep",
                reason: format!("must be a positive number of seconds, got {}", self.fixed_timestep),
            });
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Invalid {
                field: "max_substeps",
                reason: "at least one tick per frame is required".to_string(),
            });
        }
        self.tuning.validate()
    }
}
