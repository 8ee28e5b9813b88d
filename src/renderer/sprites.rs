//! Per-scene texture set and frame drawing
//!
//! Textures are loaded once when the scene is set up and dropped with the
//! [`SceneSprites`] value; the simulation only refers to them by path.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec2;

use super::hud;
use super::vertex::colors;
use crate::error::AssetError;
use crate::platform::{Canvas, TextureInfo, TextureLoader};
use crate::settings::Settings;
use crate::sim::{Body, GameState, MotionState, Rect};

/// Every texture a scene draws, keyed by path
#[derive(Debug)]
pub struct SceneSprites<T: TextureInfo> {
    textures: HashMap<String, T>,
}

impl<T: TextureInfo> SceneSprites<T> {
    /// Load the rocket's clip textures and each pad's texture
    pub fn load<L>(loader: &mut L, state: &GameState) -> Result<Self, AssetError>
    where
        L: TextureLoader<Texture = T>,
    {
        let atlas = state.rocket.animator.atlas();
        let paths = MotionState::ALL
            .iter()
            .map(|&s| atlas.clip(s).texture.as_str())
            .chain(state.pads.iter().map(|p| p.texture.as_str()));

        let mut textures: HashMap<String, T> = HashMap::new();
        for path in paths {
            if textures.contains_key(path) {
                continue;
            }
            let texture = loader.load(Path::new(path))?;
            textures.insert(path.to_string(), texture);
        }
        log::info!("Loaded {} textures", textures.len());
        Ok(Self { textures })
    }

    pub fn get(&self, path: &str) -> Option<&T> {
        self.textures.get(path)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Draw one frame: pads, rocket, then overlays
    pub fn render<C: Canvas<T>>(&self, canvas: &mut C, state: &GameState, settings: &Settings) {
        canvas.clear(colors::BACKGROUND);

        for pad in state.pads.iter().filter(|p| p.body.is_active()) {
            if let Some(texture) = self.get(&pad.texture) {
                let src = Rect::new(0.0, 0.0, texture.size().x, texture.size().y);
                draw_body(canvas, texture, &pad.body, src);
            }
        }

        let rocket = &state.rocket;
        if rocket.body.is_active() {
            if let Some(texture) = self.get(rocket.animator.texture()) {
                let src = rocket.animator.source_rect(texture.size());
                draw_body(canvas, texture, &rocket.body, src);
            }
        }

        if settings.show_colliders {
            let bodies = std::iter::once(&rocket.body).chain(state.pads.iter().map(|p| &p.body));
            for body in bodies.filter(|b| b.is_active()) {
                canvas.draw_rect_lines(body.aabb().to_rect(), colors::COLLIDER);
            }
        }

        if settings.show_hud {
            hud::draw_lines::<T, C>(canvas, &hud::telemetry(rocket));
        }
        if let Some(reason) = state.outcome() {
            hud::draw_lines::<T, C>(canvas, &[hud::banner(reason)]);
        }
    }
}

/// Sprite centred on the body's position
fn draw_body<T: TextureInfo, C: Canvas<T>>(canvas: &mut C, texture: &T, body: &Body, src: Rect) {
    let dst = Rect::new(body.position.x, body.position.y, body.scale.x, body.scale.y);
    let origin = Vec2::new(body.scale.x / 2.0, body.scale.y / 2.0);
    canvas.draw_texture(texture, src, dst, origin, body.angle, colors::WHITE);
}
