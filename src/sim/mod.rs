//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (pads in layout order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod animation;
pub mod collision;
pub mod kinematics;
pub mod outcome;
pub mod state;
pub mod thrust;
pub mod tick;

pub use aabb::{Aabb, Rect};
pub use animation::{AnimationClip, Animator, MotionState, SpriteAtlas, uv_rect};
pub use collision::{CollisionFlags, is_colliding, resolve_collisions, resolve_x, resolve_y};
pub use kinematics::integrate;
pub use outcome::{GameOverReason, OutcomeInputs, evaluate, in_bounds};
pub use state::{Body, EntityKind, EntityStatus, GameState, Pad, PadKind, Rocket};
pub use thrust::{FuelTank, ThrustDirection, ThrustIntents, drag_acceleration, thrust_acceleration};
pub use tick::{TickInput, tick};
