//! Fixed timestep simulation tick
//!
//! Advances the whole mission by one step: input becomes thrust intents,
//! the rocket runs its thrust/collision/outcome/integration/animation pass,
//! then moving pads patrol.

use super::outcome::GameOverReason;
use super::state::GameState;
use super::thrust::ThrustDirection;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub thrust_up: bool,
    pub thrust_left: bool,
    pub thrust_right: bool,
    pub thrust_down: bool,
}

impl TickInput {
    pub fn directions(&self) -> impl Iterator<Item = ThrustDirection> {
        [
            (self.thrust_left, ThrustDirection::Left),
            (self.thrust_right, ThrustDirection::Right),
            (self.thrust_up, ThrustDirection::Up),
            (self.thrust_down, ThrustDirection::Down),
        ]
        .into_iter()
        .filter_map(|(held, dir)| held.then_some(dir))
    }
}

/// Advance the game state by one fixed timestep
///
/// Returns the outcome when this tick ended the mission.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Option<GameOverReason> {
    state.time_ticks += 1;

    for direction in input.directions() {
        state.rocket.request_thrust(direction, &state.tuning);
    }

    let outcome = state.rocket.update(dt, &mut state.pads, &state.tuning);

    for pad in &mut state.pads {
        pad.update(dt, &state.tuning);
    }

    outcome
}
