//! Fixed-timestep frame driver
//!
//! One frame: sample input, feed the clock delta into the accumulator, run
//! as many fixed ticks as it holds (up to a cap), report whether to keep going.

use crate::consts::SIM_DT;
use crate::platform::{Clock, InputSource, Key};
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};

/// Outer loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Running,
    Terminated,
}

/// Accumulator that turns variable frame times into fixed steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedTimestep {
    /// A non-positive or non-finite `step` falls back to [`SIM_DT`]
    pub fn new(step: f32, max_substeps: u32) -> Self {
        let step = if step > 0.0 && step.is_finite() {
            step
        } else {
            log::warn!("Invalid fixed timestep {}, using {}", step, SIM_DT);
            SIM_DT
        };
        Self {
            step,
            accumulator: 0.0,
            max_substeps: max_substeps.max(1),
        }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried over to the next frame
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add a frame's elapsed time; returns how many fixed steps to run
    ///
    /// Leftover time smaller than a step is kept for the next frame. When the
    /// cap is hit the backlog is dropped so a slow frame can't snowball.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }

        if self.accumulator >= self.step {
            log::warn!(
                "Frame took too long, dropping {:.3}s of simulation",
                self.accumulator
            );
            self.accumulator %= self.step;
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Drives a [`GameState`] from a clock and an input source
pub struct GameLoop<C: Clock, I: InputSource> {
    clock: C,
    input: I,
    timestep: FixedTimestep,
    previous: f64,
    frames: u64,
    status: AppStatus,
}

impl<C: Clock, I: InputSource> GameLoop<C, I> {
    pub fn new(clock: C, input: I, settings: &Settings) -> Self {
        let previous = clock.now();
        Self {
            clock,
            input,
            timestep: FixedTimestep::new(settings.fixed_timestep, settings.max_substeps),
            previous,
            frames: 0,
            status: AppStatus::Running,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    pub fn status(&self) -> AppStatus {
        self.status
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Map held keys to this frame's tick input
    fn sample_input(&self) -> TickInput {
        TickInput {
            thrust_up: self.input.is_key_down(Key::Up),
            thrust_left: self.input.is_key_down(Key::Left),
            thrust_right: self.input.is_key_down(Key::Right),
            thrust_down: self.input.is_key_down(Key::Down),
        }
    }

    /// Process input and run the fixed ticks due this frame
    pub fn run_frame(&mut self, state: &mut GameState) -> AppStatus {
        if self.status == AppStatus::Terminated {
            return self.status;
        }

        self.input.begin_frame(state);
        if self.input.is_key_down(Key::Quit) || self.input.close_requested() {
            log::info!("Quit requested after {} frames", self.frames);
            self.status = AppStatus::Terminated;
            return self.status;
        }
        let input = self.sample_input();

        let now = self.clock.now();
        let frame_dt = (now - self.previous) as f32;
        self.previous = now;

        let step = self.timestep.step();
        for _ in 0..self.timestep.advance(frame_dt) {
            tick(state, &input, step);
        }

        self.frames += 1;
        self.status
    }
}
