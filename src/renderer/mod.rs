//! Rendering module
//!
//! Draws a [`GameState`](crate::sim::GameState) through the platform
//! [`Canvas`](crate::platform::Canvas) contract. Never mutates the simulation.

pub mod batch;
pub mod hud;
pub mod shapes;
pub mod sprites;
pub mod vertex;

pub use batch::{DrawCall, TextCommand, VertexBatch};
pub use hud::HudLine;
pub use sprites::SceneSprites;
pub use vertex::{Vertex, colors};
