//! Terminal outcome evaluation
//!
//! Checked once per tick after collision resolution. The first matching rule
//! wins: bounds, crash, landing, fuel. Leaving the playfield ends the mission
//! whatever the rocket is touching.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::CollisionFlags;
use crate::tuning::Tuning;

/// Why a mission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    OutOfBounds,
    OutOfFuel,
    Crashed,
    LandedSuccessfully,
}

impl GameOverReason {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, GameOverReason::LandedSuccessfully)
    }

    /// End-of-game banner text
    pub fn banner(&self) -> &'static str {
        match self {
            GameOverReason::OutOfBounds => "MISSION FAILED: OUT OF BOUNDS",
            GameOverReason::OutOfFuel => "MISSION FAILED: OUT OF FUEL",
            GameOverReason::Crashed => "MISSION FAILED: CRASHED",
            GameOverReason::LandedSuccessfully => "MISSION ACCOMPLISHED: LANDED SUCCESSFULLY",
        }
    }
}

/// Snapshot of what the evaluator looks at
#[derive(Debug, Clone, Copy)]
pub struct OutcomeInputs {
    pub collisions: CollisionFlags,
    pub position: Vec2,
    pub velocity: Vec2,
    pub fuel: f32,
}

/// True while `position` is inside the playfield (edges included)
pub fn in_bounds(position: Vec2, tuning: &Tuning) -> bool {
    position.cmpge(tuning.bounds_min).all() && position.cmple(tuning.bounds_max).all()
}

/// Decide whether this tick ends the mission
pub fn evaluate(inputs: &OutcomeInputs, tuning: &Tuning) -> Option<GameOverReason> {
    if !in_bounds(inputs.position, tuning) {
        return Some(GameOverReason::OutOfBounds);
    }
    if inputs.collisions.hit_wall_or_ceiling() {
        return Some(GameOverReason::Crashed);
    }
    if inputs.collisions.bottom && inputs.velocity.x.abs() <= tuning.max_landing_speed_x {
        return Some(GameOverReason::LandedSuccessfully);
    }
    if inputs.fuel <= 0.0 {
        return Some(GameOverReason::OutOfFuel);
    }
    None
}
