//! Data-driven game balance
//!
//! Physics constants and the mission layout. Every field has a default so a
//! settings file only needs to name what it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Physics and rule constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub thrust_acceleration: f32,
    pub horizontal_acceleration: f32,
    pub drag: f32,
    pub fuel_capacity: f32,
    pub fuel_cost_per_intent: f32,
    pub max_landing_speed_x: f32,
    pub y_collision_threshold: f32,
    pub patrol_range: f32,
    /// Stop moving pads once the mission has ended
    pub freeze_pads_on_game_over: bool,
    pub bounds_min: Vec2,
    pub bounds_max: Vec2,
    pub layout: MissionLayout,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITATIONAL_ACCELERATION,
            thrust_acceleration: THRUSTING_ACCELERATION,
            horizontal_acceleration: HORIZONTAL_ACCELERATION,
            drag: DRAG,
            fuel_capacity: FUEL_CAPACITY,
            fuel_cost_per_intent: FUEL_COST_PER_INTENT,
            max_landing_speed_x: MAX_LANDING_SPEED_X,
            y_collision_threshold: Y_COLLISION_THRESHOLD,
            patrol_range: PATROL_RANGE,
            freeze_pads_on_game_over: false,
            bounds_min: Vec2::new(BOUNDS_MIN_X, BOUNDS_MIN_Y),
            bounds_max: Vec2::new(BOUNDS_MAX_X, BOUNDS_MAX_Y),
            layout: MissionLayout::default(),
        }
    }
}

impl Tuning {
    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fuel_capacity > 0.0) {
            return Err(ConfigError::Invalid {
                field: "fuel_capacity",
                reason: format!("must be positive, got {}", self.fuel_capacity),
            });
        }
        if self.fuel_cost_per_intent < 0.0 {
            return Err(ConfigError::Invalid {
                field: "fuel_cost_per_intent",
                reason: format!("must not be negative, got {}", self.fuel_cost_per_intent),
            });
        }
        if self.drag < 0.0 {
            return Err(ConfigError::Invalid {
                field: "drag",
                reason: format!("must not be negative, got {}", self.drag),
            });
        }
        if self.bounds_min.cmpge(self.bounds_max).any() {
            return Err(ConfigError::Invalid {
                field: "bounds",
                reason: format!("min {} must be below max {}", self.bounds_min, self.bounds_max),
            });
        }
        if self.layout.rocket.frames.is_empty() {
            return Err(ConfigError::Invalid {
                field: "layout.rocket.frames",
                reason: "rocket animation needs at least one frame".to_string(),
            });
        }
        Ok(())
    }
}

/// Rocket spawn and sprite description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    pub position: Vec2,
    pub scale: Vec2,
    pub collider: Vec2,
    pub idle_texture: String,
    pub thrusting_texture: String,
    /// Sprite sheet layout as (rows, columns)
    pub sheet_rows: u32,
    pub sheet_cols: u32,
    /// Frame indices, shared by both motion states
    pub frames: Vec<u32>,
    pub frame_speed: f32,
}

impl Default for RocketConfig {
    fn default() -> Self {
        let scale = Vec2::splat(100.0);
        Self {
            position: crate::screen_origin(),
            scale,
            collider: scale / 2.0,
            idle_texture: "assets/idling_rocket.png".to_string(),
            thrusting_texture: "assets/thrusting_rocket.png".to_string(),
            sheet_rows: 1,
            sheet_cols: 6,
            frames: (0..6).collect(),
            frame_speed: DEFAULT_FRAME_SPEED,
        }
    }
}

/// Pad behaviour in a layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PadMotion {
    Fixed,
    Moving { patrol_speed: f32 },
}

/// One landing pad in a layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadConfig {
    pub position: Vec2,
    pub scale: Vec2,
    pub motion: PadMotion,
    pub texture: String,
}

/// Starting positions of every entity in the mission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionLayout {
    pub rocket: RocketConfig,
    pub pads: Vec<PadConfig>,
}

impl Default for MissionLayout {
    fn default() -> Self {
        let pad_scale = Vec2::new(200.0, 40.0);
        Self {
            rocket: RocketConfig::default(),
            pads: vec![
                PadConfig {
                    position: Vec2::new(250.0, 720.0),
                    scale: pad_scale,
                    motion: PadMotion::Fixed,
                    texture: "assets/landing_pad.png".to_string(),
                },
                PadConfig {
                    position: Vec2::new(750.0, 640.0),
                    scale: pad_scale,
                    motion: PadMotion::Moving { patrol_speed: 50.0 },
                    texture: "assets/moving_pad.png".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_rocket_collider_is_half_scale() {
        let config = RocketConfig::default();
        assert_eq!(config.collider, Vec2::splat(50.0));
        assert_eq!(config.frames.len(), 6);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let tuning = Tuning {
            bounds_min: Vec2::new(100.0, 0.0),
            bounds_max: Vec2::new(50.0, 800.0),
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::Invalid { field: "bounds", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 4.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 4.0);
        assert_eq!(tuning.thrust_acceleration, THRUSTING_ACCELERATION);
        assert_eq!(tuning.layout.pads.len(), 2);
    }
}
