//! Game state and core simulation types
//!
//! A mission is one rocket and a fixed set of landing pads. Nothing is
//! spawned or despawned while it runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::animation::{AnimationClip, Animator, MotionState, SpriteAtlas};
use super::collision::{CollisionFlags, resolve_collisions};
use super::kinematics::integrate;
use super::outcome::{GameOverReason, OutcomeInputs, evaluate};
use super::thrust::{FuelTank, ThrustDirection, ThrustIntents, thrust_acceleration};
use crate::tuning::{PadMotion, PadConfig, RocketConfig, Tuning};

/// Whether an entity takes part in simulation and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
}

/// The closed set of entity variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Rocket,
    FixedPad,
    MovingPad,
}

/// Spatial state shared by every entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Centre of the entity
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Rendered size
    pub scale: Vec2,
    /// Collider size (full width/height)
    pub collider: Vec2,
    /// Rotation in degrees
    pub angle: f32,
    pub status: EntityStatus,
}

impl Body {
    /// A resting body whose collider matches its rendered size
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            scale,
            collider: scale,
            angle: 0.0,
            status: EntityStatus::Active,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.collider)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active
    }

    pub fn activate(&mut self) {
        self.status = EntityStatus::Active;
    }

    pub fn deactivate(&mut self) {
        self.status = EntityStatus::Inactive;
    }
}

/// The player's rocket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub body: Body,
    pub fuel: FuelTank,
    pub animator: Animator,
    intents: ThrustIntents,
    /// Contacts found by the most recent simulated tick
    last_collisions: CollisionFlags,
    outcome: Option<GameOverReason>,
}

impl Rocket {
    pub fn new(body: Body, fuel_capacity: f32, animator: Animator) -> Self {
        Self {
            body,
            fuel: FuelTank::full(fuel_capacity),
            animator,
            intents: ThrustIntents::default(),
            last_collisions: CollisionFlags::default(),
            outcome: None,
        }
    }

    pub fn from_config(config: &RocketConfig, tuning: &Tuning) -> Self {
        let mut body = Body::new(config.position, config.scale);
        body.collider = config.collider;
        body.acceleration = Vec2::new(0.0, tuning.gravity);

        let atlas = SpriteAtlas::new(
            AnimationClip {
                texture: config.idle_texture.clone(),
                frames: config.frames.clone(),
            },
            AnimationClip {
                texture: config.thrusting_texture.clone(),
                frames: config.frames.clone(),
            },
            config.sheet_rows,
            config.sheet_cols,
        );

        Self::new(body, tuning.fuel_capacity, Animator::new(atlas, config.frame_speed))
    }

    pub fn kind(&self) -> EntityKind {
        EntityKind::Rocket
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.outcome
    }

    #[inline]
    pub fn motion_state(&self) -> MotionState {
        self.animator.state()
    }

    #[inline]
    pub fn intents(&self) -> ThrustIntents {
        self.intents
    }

    #[inline]
    pub fn collisions(&self) -> CollisionFlags {
        self.last_collisions
    }

    /// Request a thruster for the coming tick, paying its fuel cost
    ///
    /// Returns false and spends nothing when the tank is empty, the rocket is
    /// inactive or the mission is over.
    pub fn request_thrust(&mut self, direction: ThrustDirection, tuning: &Tuning) -> bool {
        if !self.body.is_active() || self.is_game_over() || direction == ThrustDirection::Down {
            return false;
        }
        if !self.fuel.burn(tuning.fuel_cost_per_intent) {
            return false;
        }
        match direction {
            ThrustDirection::Up => self.intents.up = true,
            ThrustDirection::Left => self.intents.left = true,
            ThrustDirection::Right => self.intents.right = true,
            ThrustDirection::Down => {}
        }
        true
    }

    pub fn accelerate_up(&mut self, tuning: &Tuning) -> bool {
        self.request_thrust(ThrustDirection::Up, tuning)
    }

    pub fn accelerate_left(&mut self, tuning: &Tuning) -> bool {
        self.request_thrust(ThrustDirection::Left, tuning)
    }

    pub fn accelerate_right(&mut self, tuning: &Tuning) -> bool {
        self.request_thrust(ThrustDirection::Right, tuning)
    }

    /// Latch the outcome; later calls are ignored
    fn finish(&mut self, reason: GameOverReason) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        if reason == GameOverReason::OutOfFuel {
            self.fuel.drain();
        }
        self.outcome = Some(reason);
        true
    }

    /// Run one fixed tick against the given pads
    ///
    /// Returns the outcome if this tick ended the mission. Every pad is told
    /// about the end of the mission.
    pub fn update(&mut self, dt: f32, pads: &mut [Pad], tuning: &Tuning) -> Option<GameOverReason> {
        if !self.body.is_active() || self.is_game_over() {
            return None;
        }

        // Thrusters
        self.body.acceleration = thrust_acceleration(self.intents, self.body.velocity.x, dt, tuning);
        let motion = if self.intents.any() {
            MotionState::Thrusting
        } else {
            MotionState::Idle
        };
        self.animator.transition(motion);
        self.intents.clear();

        // Collisions
        let obstacles: Vec<Aabb> = pads
            .iter()
            .filter(|p| p.body.is_active())
            .map(|p| p.body.aabb())
            .collect();
        self.last_collisions =
            resolve_collisions(&mut self.body, &obstacles, tuning.y_collision_threshold);

        // Outcome
        let inputs = OutcomeInputs {
            collisions: self.last_collisions,
            position: self.body.position,
            velocity: self.body.velocity,
            fuel: self.fuel.level(),
        };
        if let Some(reason) = evaluate(&inputs, tuning) {
            if self.finish(reason) {
                for pad in pads.iter_mut() {
                    pad.set_game_over();
                }
                log::info!(
                    "Mission over: {:?} at ({:.1}, {:.1}), fuel {:.2}",
                    reason,
                    self.body.position.x,
                    self.body.position.y,
                    self.fuel.level()
                );
                return Some(reason);
            }
        }

        integrate(
            &mut self.body.position,
            &mut self.body.velocity,
            self.body.acceleration,
            dt,
        );
        self.animator.advance(dt);

        None
    }
}

/// Pad behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PadKind {
    Fixed,
    /// Patrols horizontally around `starting_x`
    Moving { starting_x: f32, patrol_speed: f32 },
}

/// A landing pad (passive collider)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pad {
    pub body: Body,
    pub kind: PadKind,
    /// Texture key
    pub texture: String,
    game_over: bool,
}

impl Pad {
    pub fn fixed(position: Vec2, scale: Vec2) -> Self {
        Self {
            body: Body::new(position, scale),
            kind: PadKind::Fixed,
            texture: String::new(),
            game_over: false,
        }
    }

    pub fn moving(position: Vec2, scale: Vec2, patrol_speed: f32) -> Self {
        Self {
            body: Body::new(position, scale),
            kind: PadKind::Moving {
                starting_x: position.x,
                patrol_speed,
            },
            texture: String::new(),
            game_over: false,
        }
    }

    pub fn from_config(config: &PadConfig) -> Self {
        let mut pad = match config.motion {
            PadMotion::Fixed => Self::fixed(config.position, config.scale),
            PadMotion::Moving { patrol_speed } => Self::moving(config.position, config.scale, patrol_speed),
        };
        pad.texture = config.texture.clone();
        pad
    }

    pub fn kind(&self) -> EntityKind {
        match self.kind {
            PadKind::Fixed => EntityKind::FixedPad,
            PadKind::Moving { .. } => EntityKind::MovingPad,
        }
    }

    pub fn patrol_speed(&self) -> Option<f32> {
        match self.kind {
            PadKind::Fixed => None,
            PadKind::Moving { patrol_speed, .. } => Some(patrol_speed),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn set_game_over(&mut self) {
        self.game_over = true;
    }

    /// Advance the patrol; fixed pads never move
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        if !self.body.is_active() {
            return;
        }
        if self.game_over && tuning.freeze_pads_on_game_over {
            return;
        }
        if let PadKind::Moving {
            starting_x,
            ref mut patrol_speed,
        } = self.kind
        {
            self.body.position.x += *patrol_speed * dt;
            let x = self.body.position.x;
            let past_right = x > starting_x + tuning.patrol_range && *patrol_speed > 0.0;
            let past_left = x < starting_x - tuning.patrol_range && *patrol_speed < 0.0;
            if past_right || past_left {
                *patrol_speed = -*patrol_speed;
                log::debug!("Pad turned around at x={:.1}", x);
            }
        }
    }
}

/// Complete mission state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Rules and layout this mission was built from
    pub tuning: Tuning,
    pub rocket: Rocket,
    pub pads: Vec<Pad>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a mission from the layout in `tuning`
    pub fn new(tuning: Tuning) -> Self {
        let rocket = Rocket::from_config(&tuning.layout.rocket, &tuning);
        let pads = tuning.layout.pads.iter().map(Pad::from_config).collect();
        Self::with_entities(tuning, rocket, pads)
    }

    pub fn with_entities(tuning: Tuning, rocket: Rocket, pads: Vec<Pad>) -> Self {
        Self {
            tuning,
            rocket,
            pads,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.rocket.is_game_over()
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOverReason> {
        self.rocket.game_over_reason()
    }
}
