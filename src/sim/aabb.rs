//! Axis-aligned box geometry for colliders
//!
//! Boxes are centre-origin: `center` is the body position and `size` the full
//! collider dimensions, so half-extents are `size / 2`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A centre-origin axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }

    /// Per-axis gap between two boxes (negative means overlapping on that axis)
    pub fn gap(&self, other: &Aabb) -> Vec2 {
        (self.center - other.center).abs() - (self.half_extents() + other.half_extents())
    }

    /// True when the boxes overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = self.gap(other);
        gap.x < 0.0 && gap.y < 0.0
    }

    /// Per-axis penetration depth, zero where the boxes are apart
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        (-self.gap(other)).max(Vec2::ZERO)
    }

    /// Outline rectangle in screen space
    pub fn to_rect(&self) -> Rect {
        let min = self.min();
        Rect::new(min.x, min.y, self.size.x, self.size.y)
    }
}

/// A top-left-origin rectangle (texture sub-regions and draw targets)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
