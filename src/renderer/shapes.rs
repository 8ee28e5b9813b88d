//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `dst`, rotated `angle` degrees about `origin`
///
/// `dst.x`/`dst.y` is the on-screen position of `origin`, which is measured
/// from the quad's top-left corner. `uv` is in normalized texture space.
pub fn sprite_quad(dst: Rect, origin: Vec2, angle: f32, uv: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let rotation = Vec2::from_angle(angle.to_radians());
    let anchor = Vec2::new(dst.x, dst.y);
    let corner = |x: f32, y: f32| anchor + rotation.rotate(Vec2::new(x, y) - origin);

    let tl = corner(0.0, 0.0);
    let tr = corner(dst.width, 0.0);
    let bl = corner(0.0, dst.height);
    let br = corner(dst.width, dst.height);

    let (u0, v0) = (uv.x, uv.y);
    let (u1, v1) = (uv.x + uv.width, uv.y + uv.height);

    [
        Vertex::new(tl.x, tl.y, u0, v0, color),
        Vertex::new(bl.x, bl.y, u0, v1, color),
        Vertex::new(tr.x, tr.y, u1, v0, color),
        Vertex::new(tr.x, tr.y, u1, v0, color),
        Vertex::new(bl.x, bl.y, u0, v1, color),
        Vertex::new(br.x, br.y, u1, v1, color),
    ]
}

/// Axis-aligned filled rectangle
pub fn filled_rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    sprite_quad(rect, Vec2::ZERO, 0.0, Rect::default(), color)
}

/// Outline of `rect` drawn inside its bounds, `thickness` pixels wide
pub fn rect_outline(rect: Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let inner_height = (rect.height - 2.0 * t).max(0.0);

    let edges = [
        Rect::new(rect.x, rect.y, rect.width, t),
        Rect::new(rect.x, rect.y + rect.height - t, rect.width, t),
        Rect::new(rect.x, rect.y + t, t, inner_height),
        Rect::new(rect.x + rect.width - t, rect.y + t, t, inner_height),
    ];

    let mut vertices = Vec::with_capacity(edges.len() * 6);
    for edge in edges {
        vertices.extend_from_slice(&filled_rect(edge, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    fn positions(vertices: &[Vertex]) -> Vec<[f32; 2]> {
        vertices.iter().map(|v| v.position).collect()
    }

    #[test]
    fn test_centered_sprite_quad() {
        let quad = sprite_quad(
            Rect::new(750.0, 400.0, 100.0, 100.0),
            Vec2::new(50.0, 50.0),
            0.0,
            Rect::new(0.0, 0.0, 1.0 / 6.0, 1.0),
            colors::WHITE,
        );
        assert_eq!(quad[0].position, [700.0, 350.0]);
        assert_eq!(quad[5].position, [800.0, 450.0]);
        assert_eq!(quad[5].uv, [1.0 / 6.0, 1.0]);
    }

    #[test]
    fn test_rotated_quad_turns_about_origin() {
        let quad = sprite_quad(
            Rect::new(0.0, 0.0, 2.0, 2.0),
            Vec2::new(1.0, 1.0),
            90.0,
            Rect::default(),
            colors::WHITE,
        );
        // Top-left corner (-1, -1) rotated a quarter turn lands at (1, -1)
        let [x, y] = quad[0].position;
        assert!((x - 1.0).abs() < 1e-5 && (y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_outline_has_four_edges_inside_rect() {
        let rect = Rect::new(10.0, 20.0, 50.0, 30.0);
        let vertices = rect_outline(rect, 1.0, colors::COLLIDER);
        assert_eq!(vertices.len(), 24);
        for [x, y] in positions(&vertices) {
            assert!((10.0..=60.0).contains(&x));
            assert!((20.0..=50.0).contains(&y));
        }
        assert!(vertices.iter().all(|v| v.color == colors::COLLIDER));
    }

    #[test]
    fn test_outline_of_tiny_rect_does_not_invert() {
        let vertices = rect_outline(Rect::new(0.0, 0.0, 1.0, 1.0), 4.0, colors::COLLIDER);
        for [x, y] in positions(&vertices) {
            assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
        }
    }
}
