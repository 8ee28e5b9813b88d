//! Thrust intents and the fuel tank
//!
//! Input sets intents (spending fuel as it does), the rocket turns them into
//! acceleration once per tick and clears them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Thruster directions the player can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrustDirection {
    Up,
    Left,
    Right,
    /// Accepted for input symmetry; the rocket has no downward thruster
    Down,
}

/// Thrusters requested for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrustIntents {
    pub up: bool,
    pub left: bool,
    pub right: bool,
}

impl ThrustIntents {
    #[inline]
    pub fn any(&self) -> bool {
        self.up || self.left || self.right
    }

    #[inline]
    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Depletable fuel, kept within `[0, capacity]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelTank {
    level: f32,
    capacity: f32,
}

impl FuelTank {
    pub fn full(capacity: f32) -> Self {
        Self {
            level: capacity,
            capacity,
        }
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    #[inline]
    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.level <= 0.0
    }

    /// Remaining fuel as a percentage of capacity
    pub fn percent(&self) -> f32 {
        if self.capacity > 0.0 {
            self.level / self.capacity * 100.0
        } else {
            0.0
        }
    }

    /// Spend `cost`; returns false (spending nothing) if the tank is empty
    pub fn burn(&mut self, cost: f32) -> bool {
        if self.is_empty() {
            return false;
        }
        self.level = (self.level - cost.max(0.0)).max(0.0);
        true
    }

    /// Force the level to exactly zero
    pub fn drain(&mut self) {
        self.level = 0.0;
    }

    /// Set an explicit level, clamped to the tank
    pub fn set_level(&mut self, level: f32) {
        self.level = level.clamp(0.0, self.capacity);
    }
}

/// Horizontal drag that slows the rocket without reversing it within one tick
///
/// Returns zero for a non-positive or non-finite `dt`.
pub fn drag_acceleration(velocity_x: f32, drag: f32, dt: f32) -> f32 {
    if !(dt > 0.0 && dt.is_finite()) {
        return 0.0;
    }
    let drag = -velocity_x * drag;
    let stop = -velocity_x / dt;
    if drag.abs() > stop.abs() { stop } else { drag }
}

/// Acceleration for one tick: gravity, then thrusters, then drag
pub fn thrust_acceleration(intents: ThrustIntents, velocity_x: f32, dt: f32, tuning: &Tuning) -> Vec2 {
    let mut acceleration = Vec2::new(0.0, tuning.gravity);

    if intents.up {
        acceleration.y -= tuning.thrust_acceleration;
    }
    if intents.left {
        acceleration.x -= tuning.horizontal_acceleration;
    }
    if intents.right {
        acceleration.x += tuning.horizontal_acceleration;
    }

    if !intents.horizontal() {
        acceleration.x += drag_acceleration(velocity_x, tuning.drag, dt);
    }

    acceleration
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    #[test]
    fn test_idle_is_pure_gravity() {
        let acc = thrust_acceleration(ThrustIntents::default(), 0.0, SIM_DT, &Tuning::default());
        assert_eq!(acc, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_up_thrust_beats_gravity() {
        let intents = ThrustIntents {
            up: true,
            ..Default::default()
        };
        let acc = thrust_acceleration(intents, 0.0, SIM_DT, &Tuning::default());
        assert_eq!(acc, Vec2::new(0.0, -8.0));
    }

    #[test]
    fn test_opposing_side_thrusters_cancel_without_drag() {
        let intents = ThrustIntents {
            left: true,
            right: true,
            ..Default::default()
        };
        let acc = thrust_acceleration(intents, 40.0, SIM_DT, &Tuning::default());
        assert_eq!(acc.x, 0.0);
    }

    #[test]
    fn test_drag_opposes_motion() {
        let acc = thrust_acceleration(ThrustIntents::default(), 20.0, SIM_DT, &Tuning::default());
        assert!((acc.x - (-10.0)).abs() < 1e-5);
    }

    #[test]
    fn test_drag_clamped_to_stop() {
        // Huge drag would reverse a slow rocket within one tick
        let ax = drag_acceleration(0.01, 1000.0, 0.1);
        assert!((ax - (-0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_drag_skipped_for_bad_dt() {
        assert_eq!(drag_acceleration(10.0, 0.5, 0.0), 0.0);
        assert_eq!(drag_acceleration(10.0, 0.5, -1.0), 0.0);
        assert_eq!(drag_acceleration(10.0, 0.5, f32::NAN), 0.0);
    }

    #[test]
    fn test_burn_stops_at_zero() {
        let mut tank = FuelTank::full(0.0015);
        assert!(tank.burn(0.001));
        assert!(tank.burn(0.001));
        assert_eq!(tank.level(), 0.0);
        assert!(!tank.burn(0.001));
        assert_eq!(tank.level(), 0.0);
    }

    #[test]
    fn test_percent() {
        let mut tank = FuelTank::full(50.0);
        tank.set_level(25.0);
        assert_eq!(tank.percent(), 50.0);
    }

    proptest! {
        #[test]
        fn prop_drag_never_reverses_velocity(vx in -500.0f32..500.0, drag in 0.0f32..100.0) {
            let ax = drag_acceleration(vx, drag, SIM_DT);
            let next = vx + ax * SIM_DT;
            prop_assert!(next * vx.signum() >= -1e-2);
            prop_assert!(next.abs() <= vx.abs() + 1e-3);
        }

        #[test]
        fn prop_fuel_never_negative(costs in proptest::collection::vec(0.0f32..5.0, 0..200)) {
            let mut tank = FuelTank::full(100.0);
            let mut last = tank.level();
            for cost in costs {
                tank.burn(cost);
                prop_assert!(tank.level() >= 0.0);
                prop_assert!(tank.level() <= last);
                last = tank.level();
            }
        }
    }
}
