//! Lunar Lander - land a rocket on a pad before the fuel runs out
//!
//! Core modules:
//! - `sim`: Deterministic simulation (thrust, collisions, outcomes, animation)
//! - `renderer`: Sprite, collider and HUD drawing against a canvas contract
//! - `platform`: Clock, input, texture and canvas abstractions
//! - `game_loop`: Fixed timestep driver
//! - `settings` / `tuning`: Preferences and data-driven game balance

pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{AssetError, ConfigError};
pub use game_loop::{AppStatus, FixedTimestep, GameLoop};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Render frame rate the window layer targets
    pub const TARGET_FPS: u32 = 120;

    /// Screen dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 1500.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Playfield bounds; leaving them ends the mission
    pub const BOUNDS_MIN_X: f32 = -50.0;
    pub const BOUNDS_MAX_X: f32 = 1550.0;
    pub const BOUNDS_MIN_Y: f32 = -50.0;
    pub const BOUNDS_MAX_Y: f32 = 850.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITATIONAL_ACCELERATION: f32 = 10.0;
    /// Main engine acceleration, applied against gravity
    pub const THRUSTING_ACCELERATION: f32 = 18.0;
    /// Side thruster acceleration
    pub const HORIZONTAL_ACCELERATION: f32 = 12.0;
    /// Horizontal drag coefficient when no side thruster fires
    pub const DRAG: f32 = 0.5;

    /// Fuel tank capacity (percent)
    pub const FUEL_CAPACITY: f32 = 100.0;
    /// Fuel spent by each accepted thrust intent
    pub const FUEL_COST_PER_INTENT: f32 = 0.001;

    /// Maximum horizontal speed for a successful landing
    pub const MAX_LANDING_SPEED_X: f32 = 5.0;
    /// Vertical overlap below which a pad is treated as floor, not wall
    pub const Y_COLLISION_THRESHOLD: f32 = 0.5;

    /// Moving pads turn around this far from where they started
    pub const PATROL_RANGE: f32 = 500.0;

    /// Sprite animation speed (frames per second)
    pub const DEFAULT_FRAME_SPEED: f32 = 12.0;
}

/// Screen centre, where the rocket starts
#[inline]
pub fn screen_origin() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH / 2.0, consts::SCREEN_HEIGHT / 2.0)
}

/// Altitude above the bottom of the screen (y grows downward)
#[inline]
pub fn altitude(pos: Vec2) -> f32 {
    consts::SCREEN_HEIGHT - pos.y
}
