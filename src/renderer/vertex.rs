//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with texture coordinates and tint
///
/// Untextured geometry (outlines) uses `uv = [0, 0]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    /// Bytes between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// No tint
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = WHITE;
    pub const COLLIDER: [f32; 4] = [0.0, 0.89, 0.19, 1.0];
    pub const MISSION_FAILED: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
    pub const MISSION_ACCOMPLISHED: [f32; 4] = [0.0, 0.89, 0.19, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 8 * 4);
        let v = Vertex::new(1.0, 2.0, 0.5, 0.25, colors::WHITE);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 0.5, 0.25, 1.0, 1.0, 1.0, 1.0]);
    }
}
