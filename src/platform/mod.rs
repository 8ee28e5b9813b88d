//! Platform abstraction layer
//!
//! Contracts the game needs from a windowing/graphics backend:
//! - Time (monotonic clock)
//! - Input (key state and close requests)
//! - Texture loading
//! - Drawing (textured quads, outlines, text)
//!
//! Headless implementations live in the submodules; a windowed backend only
//! has to implement these traits.

pub mod assets;
pub mod input;
pub mod time;

use std::path::Path;

use glam::Vec2;

use crate::error::AssetError;
use crate::sim::{GameState, Rect};

pub use assets::{HeadlessTexture, HeadlessTextureLoader};
pub use input::{Autopilot, ScriptedInput};
pub use time::{ManualClock, SystemClock};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Monotonic time source
pub trait Clock {
    /// Seconds since an arbitrary fixed epoch
    fn now(&self) -> f64;
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Left,
    Right,
    Down,
    Quit,
}

/// Per-frame input
pub trait InputSource {
    /// Called once at the start of every frame, before any key query
    fn begin_frame(&mut self, _state: &GameState) {}

    /// Level-triggered key state for the current frame
    fn is_key_down(&self, key: Key) -> bool;

    /// Edge-triggered window close; true at most once per request
    fn close_requested(&mut self) -> bool {
        false
    }
}

/// Size information every backend texture exposes
pub trait TextureInfo {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Path the texture was loaded from, used as its identity
    fn path(&self) -> &Path;

    fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }
}

/// Loads image files into backend textures
pub trait TextureLoader {
    type Texture: TextureInfo;

    fn load(&mut self, path: &Path) -> Result<Self::Texture, AssetError>;
}

/// Immediate-mode drawing surface
pub trait Canvas<T: TextureInfo> {
    fn clear(&mut self, color: Color);

    /// Draw `src` (texture pixels) into `dst`, rotated `angle` degrees about
    /// `origin`; `dst.x`/`dst.y` is where `origin` lands on screen
    fn draw_texture(&mut self, texture: &T, src: Rect, dst: Rect, origin: Vec2, angle: f32, tint: Color);

    /// One pixel outline
    fn draw_rect_lines(&mut self, rect: Rect, color: Color);

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color);
}
