//! CPU-side draw recording
//!
//! [`VertexBatch`] implements [`Canvas`] by appending triangles to one vertex
//! list and grouping consecutive draws that share a texture. A GPU backend
//! uploads [`VertexBatch::vertex_bytes`] once per frame and replays the draw
//! calls; text is kept as commands for the backend's font renderer.

use std::ops::Range;
use std::path::{Path, PathBuf};

use glam::Vec2;

use super::shapes::{rect_outline, sprite_quad};
use super::vertex::{Vertex, colors};
use crate::platform::{Canvas, Color, TextureInfo};
use crate::sim::Rect;

/// A run of vertices drawn with one texture (or none)
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub texture: Option<PathBuf>,
    pub vertices: Range<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub position: Vec2,
    pub size: f32,
    pub color: Color,
}

/// One frame of recorded drawing
#[derive(Debug, Clone)]
pub struct VertexBatch {
    clear_color: Color,
    vertices: Vec<Vertex>,
    draws: Vec<DrawCall>,
    texts: Vec<TextCommand>,
}

impl Default for VertexBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexBatch {
    pub fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
            draws: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for a GPU buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    pub fn texts(&self) -> &[TextCommand] {
        &self.texts
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.texts.is_empty()
    }

    fn push(&mut self, texture: Option<&Path>, vertices: &[Vertex]) {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(vertices);
        let end = self.vertices.len() as u32;

        match self.draws.last_mut() {
            Some(last) if last.texture.as_deref() == texture && last.vertices.end == start => {
                last.vertices.end = end;
            }
            _ => self.draws.push(DrawCall {
                texture: texture.map(Path::to_path_buf),
                vertices: start..end,
            }),
        }
    }
}

impl<T: TextureInfo> Canvas<T> for VertexBatch {
    /// Starts a new frame
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.draws.clear();
        self.texts.clear();
    }

    fn draw_texture(&mut self, texture: &T, src: Rect, dst: Rect, origin: Vec2, angle: f32, tint: Color) {
        let size = texture.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let uv = Rect::new(src.x / size.x, src.y / size.y, src.width / size.x, src.height / size.y);
        let quad = sprite_quad(dst, origin, angle, uv, tint);
        self.push(Some(texture.path()), &quad);
    }

    fn draw_rect_lines(&mut self, rect: Rect, color: Color) {
        let outline = rect_outline(rect, 1.0, color);
        self.push(None, &outline);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color) {
        self.texts.push(TextCommand {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }
}
