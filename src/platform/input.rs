//! Input sources that need no window

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use super::{InputSource, Key};
use crate::sim::{GameState, PadKind};

/// Replays keys held over frame ranges
///
/// Frames are counted from 0 by [`InputSource::begin_frame`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    holds: Vec<(Key, Range<u64>)>,
    closes: HashSet<u64>,
    frame: Option<u64>,
    pending_close: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `key` down for every frame in `frames`
    pub fn hold(mut self, key: Key, frames: Range<u64>) -> Self {
        self.holds.push((key, frames));
        self
    }

    /// Request a window close on `frame`
    pub fn close_at(mut self, frame: u64) -> Self {
        self.closes.insert(frame);
        self
    }

    /// Frame currently being played, `None` before the first frame
    pub fn frame(&self) -> Option<u64> {
        self.frame
    }
}

impl InputSource for ScriptedInput {
    fn begin_frame(&mut self, _state: &GameState) {
        let frame = self.frame.map_or(0, |f| f + 1);
        self.frame = Some(frame);
        if self.closes.contains(&frame) {
            self.pending_close = true;
        }
    }

    fn is_key_down(&self, key: Key) -> bool {
        let Some(frame) = self.frame else {
            return false;
        };
        self.holds
            .iter()
            .any(|(k, frames)| *k == key && frames.contains(&frame))
    }

    fn close_requested(&mut self) -> bool {
        std::mem::take(&mut self.pending_close)
    }
}

/// Demo pilot that steers toward the first fixed pad and sets down on it
///
/// Presses Quit once the mission is over.
#[derive(Debug, Clone)]
pub struct Autopilot {
    keys: HashMap<Key, bool>,
    /// Horizontal speed the pilot aims for while traversing
    pub cruise_speed: f32,
    /// Downward speed the pilot allows on final approach
    pub descent_speed: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            keys: HashMap::new(),
            cruise_speed: 40.0,
            descent_speed: 20.0,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    fn press(&mut self, key: Key, down: bool) {
        self.keys.insert(key, down);
    }
}

impl InputSource for Autopilot {
    fn begin_frame(&mut self, state: &GameState) {
        self.keys.clear();
        if state.is_game_over() {
            self.press(Key::Quit, true);
            return;
        }

        let target = state
            .pads
            .iter()
            .find(|p| matches!(p.kind, PadKind::Fixed) && p.body.is_active())
            .or_else(|| state.pads.first());
        let Some(target) = target else {
            return;
        };

        let body = &state.rocket.body;
        let dx = target.body.position.x - body.position.x;
        let landing_margin = (target.body.collider.x - body.collider.x).max(0.0) / 4.0;
        let aligned = dx.abs() <= landing_margin.max(1.0);

        let desired_vx = if aligned {
            0.0
        } else {
            (dx * 0.5).clamp(-self.cruise_speed, self.cruise_speed)
        };
        let vx = body.velocity.x;
        self.press(Key::Right, vx < desired_vx - 1.0);
        self.press(Key::Left, vx > desired_vx + 1.0);

        let max_landing = state.tuning.max_landing_speed_x;
        let desired_vy = if aligned && vx.abs() < max_landing * 0.5 {
            self.descent_speed
        } else {
            -2.0
        };
        self.press(Key::Up, body.velocity.y > desired_vy);
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Tuning::default())
    }

    #[test]
    fn test_script_holds_keys_for_frame_range() {
        let state = state();
        let mut input = ScriptedInput::new().hold(Key::Up, 1..3);
        assert!(!input.is_key_down(Key::Up));

        let pressed: Vec<bool> = (0..4)
            .map(|_| {
                input.begin_frame(&state);
                input.is_key_down(Key::Up)
            })
            .collect();
        assert_eq!(pressed, vec![false, true, true, false]);
        assert!(!input.is_key_down(Key::Left));
    }

    #[test]
    fn test_close_is_edge_triggered() {
        let state = state();
        let mut input = ScriptedInput::new().close_at(1);
        input.begin_frame(&state);
        assert!(!input.close_requested());
        input.begin_frame(&state);
        assert!(input.close_requested());
        assert!(!input.close_requested());
    }

    #[test]
    fn test_autopilot_steers_toward_fixed_pad() {
        let state = state();
        let mut pilot = Autopilot::new();
        pilot.begin_frame(&state);
        // Default rocket starts right of the fixed pad
        assert!(pilot.is_key_down(Key::Left));
        assert!(!pilot.is_key_down(Key::Right));
        assert!(!pilot.is_key_down(Key::Quit));
    }

    #[test]
    fn test_autopilot_quits_after_game_over() {
        let mut state = state();
        state.rocket.body.position.x = 5000.0;
        crate::sim::tick(&mut state, &Default::default(), crate::consts::SIM_DT);
        assert!(state.is_game_over());

        let mut pilot = Autopilot::new();
        pilot.begin_frame(&state);
        assert!(pilot.is_key_down(Key::Quit));
        assert!(!pilot.is_key_down(Key::Up));
    }
}
