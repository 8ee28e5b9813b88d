//! Collision detection and response for axis-aligned boxes
//!
//! Resolution is axis-separated: every obstacle is resolved on Y first, then
//! every obstacle on X. A body resting on a pad always overlaps it a little
//! on Y, so the X pass ignores pairs whose Y overlap is below a threshold;
//! otherwise the floor would act as a wall.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::state::Body;

/// Which sides of the body were hit this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    /// Hit on a side or from below: anything but a landing contact
    #[inline]
    pub fn hit_wall_or_ceiling(&self) -> bool {
        self.left || self.right || self.top
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

impl BitOr for CollisionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            top: self.top || rhs.top,
            bottom: self.bottom || rhs.bottom,
            left: self.left || rhs.left,
            right: self.right || rhs.right,
        }
    }
}

impl BitOrAssign for CollisionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// Broad-phase test: true iff the boxes overlap on both axes
#[inline]
pub fn is_colliding(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Push the body out of every obstacle along Y, opposite its Y velocity
///
/// A body with zero Y velocity gets no response.
pub fn resolve_y(body: &mut Body, obstacles: &[Aabb]) -> CollisionFlags {
    let mut flags = CollisionFlags::default();

    for obstacle in obstacles {
        let aabb = body.aabb();
        if !is_colliding(&aabb, obstacle) {
            continue;
        }
        let overlap = aabb.penetration(obstacle).y;

        if body.velocity.y > 0.0 {
            body.position.y -= overlap;
            body.velocity.y = 0.0;
            flags.bottom = true;
        } else if body.velocity.y < 0.0 {
            body.position.y += overlap;
            body.velocity.y = 0.0;
            flags.top = true;
        }
    }

    flags
}

/// Push the body out of every obstacle along X, opposite its X velocity
///
/// Pairs overlapping by less than `y_threshold` vertically are skipped.
pub fn resolve_x(body: &mut Body, obstacles: &[Aabb], y_threshold: f32) -> CollisionFlags {
    let mut flags = CollisionFlags::default();

    for obstacle in obstacles {
        let aabb = body.aabb();
        if !is_colliding(&aabb, obstacle) {
            continue;
        }
        let overlap = aabb.penetration(obstacle);

        // Standing on a platform
        if overlap.y < y_threshold {
            continue;
        }

        if body.velocity.x > 0.0 {
            body.position.x -= overlap.x;
            body.velocity.x = 0.0;
            flags.right = true;
        } else if body.velocity.x < 0.0 {
            body.position.x += overlap.x;
            body.velocity.x = 0.0;
            flags.left = true;
        }
    }

    flags
}

/// Resolve all obstacles, Y pass then X pass, and report this tick's contacts
pub fn resolve_collisions(body: &mut Body, obstacles: &[Aabb], y_threshold: f32) -> CollisionFlags {
    let y_flags = resolve_y(body, obstacles);
    let x_flags = resolve_x(body, obstacles, y_threshold);
    y_flags | x_flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const THRESHOLD: f32 = 0.5;

    fn rocket_at(pos: Vec2, vel: Vec2) -> Body {
        let mut body = Body::new(pos, Vec2::splat(100.0));
        body.collider = Vec2::splat(50.0);
        body.velocity = vel;
        body
    }

    fn pad_at(pos: Vec2) -> Aabb {
        Aabb::new(pos, Vec2::new(200.0, 40.0))
    }

    #[test]
    fn test_landing_pushes_up() {
        // Rocket bottom at 701, pad top at 700
        let mut body = rocket_at(Vec2::new(500.0, 676.0), Vec2::new(2.0, 3.0));
        let flags = resolve_collisions(&mut body, &[pad_at(Vec2::new(500.0, 720.0))], THRESHOLD);
        assert!(flags.bottom);
        assert!(!flags.hit_wall_or_ceiling());
        assert_eq!(body.velocity, Vec2::new(2.0, 0.0));
        assert!((body.position.y - 675.0).abs() < 1e-3);
    }

    #[test]
    fn test_ceiling_hit_pushes_down() {
        let mut body = rocket_at(Vec2::new(500.0, 744.0), Vec2::new(0.0, -4.0));
        let flags = resolve_collisions(&mut body, &[pad_at(Vec2::new(500.0, 720.0))], THRESHOLD);
        assert!(flags.top);
        assert_eq!(body.velocity.y, 0.0);
        assert!((body.position.y - 765.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_velocity_no_response() {
        let start = Vec2::new(500.0, 690.0);
        let mut body = rocket_at(start, Vec2::ZERO);
        let flags = resolve_collisions(&mut body, &[pad_at(Vec2::new(500.0, 720.0))], THRESHOLD);
        assert_eq!(flags, CollisionFlags::default());
        assert_eq!(body.position, start);
    }

    #[test]
    fn test_side_hit_with_no_vertical_motion() {
        // Deep vertical overlap, rocket sliding right into the pad's left edge
        let mut body = rocket_at(Vec2::new(380.0, 720.0), Vec2::new(6.0, 0.0));
        let flags = resolve_collisions(&mut body, &[pad_at(Vec2::new(500.0, 720.0))], THRESHOLD);
        assert!(flags.right);
        assert!(!flags.bottom);
        assert_eq!(body.velocity.x, 0.0);
        assert!((body.position.x - 375.0).abs() < 1e-3);
    }

    #[test]
    fn test_left_hit() {
        let mut body = rocket_at(Vec2::new(620.0, 720.0), Vec2::new(-6.0, 0.0));
        let flags = resolve_collisions(&mut body, &[pad_at(Vec2::new(500.0, 720.0))], THRESHOLD);
        assert!(flags.left);
        assert!((body.position.x - 625.0).abs() < 1e-3);
    }

    #[test]
    fn test_standing_on_pad_never_hits_wall() {
        // Resting with 0.3 of overlap and no vertical motion
        let mut body = rocket_at(Vec2::new(500.0, 675.3), Vec2::new(40.0, 0.0));
        let flags = resolve_collisions(&mut body, &[pad_at(Vec2::new(500.0, 720.0))], THRESHOLD);
        assert_eq!(flags, CollisionFlags::default());
        assert_eq!(body.velocity.x, 40.0);
    }

    #[test]
    fn test_no_obstacles() {
        let mut body = rocket_at(Vec2::new(500.0, 100.0), Vec2::new(3.0, 3.0));
        let flags = resolve_collisions(&mut body, &[], THRESHOLD);
        assert!(!flags.any());
    }

    #[test]
    fn test_flags_merge() {
        let a = CollisionFlags {
            bottom: true,
            ..Default::default()
        };
        let b = CollisionFlags {
            left: true,
            ..Default::default()
        };
        let merged = a | b;
        assert!(merged.bottom && merged.left);
        assert!(merged.hit_wall_or_ceiling());
    }

    proptest! {
        #[test]
        fn prop_y_resolution_removes_penetration(
            dx in -120.0f32..120.0,
            depth in 0.01f32..40.0,
            vx in -50.0f32..50.0,
            vy in 0.1f32..50.0,
        ) {
            // Rocket above the pad, falling into it
            let pad = pad_at(Vec2::new(500.0, 720.0));
            let top = pad.min().y;
            let mut body = rocket_at(Vec2::new(500.0 + dx, top - 25.0 + depth), Vec2::new(vx, vy));
            prop_assume!(is_colliding(&body.aabb(), &pad));

            let flags = resolve_y(&mut body, &[pad]);
            prop_assert!(flags.bottom);
            prop_assert!(body.aabb().gap(&pad).y >= -1e-3);
            prop_assert_eq!(body.velocity.y, 0.0);
        }

        #[test]
        fn prop_resting_contact_never_flags_x(
            dx in -120.0f32..120.0,
            depth in 0.0f32..0.49,
            vx in -500.0f32..500.0,
        ) {
            let pad = pad_at(Vec2::new(500.0, 720.0));
            let top = pad.min().y;
            let mut body = rocket_at(Vec2::new(500.0 + dx, top - 25.0 + depth), Vec2::new(vx, 0.0));
            let flags = resolve_collisions(&mut body, &[pad], THRESHOLD);
            prop_assert!(!flags.left && !flags.right);
        }

        #[test]
        fn prop_x_resolution_removes_penetration(
            depth in 0.01f32..40.0,
            dy in -10.0f32..10.0,
            speed in 0.1f32..50.0,
            from_left in any::<bool>(),
        ) {
            // Deep vertical overlap, rocket driving into one of the pad's sides
            let pad = pad_at(Vec2::new(500.0, 720.0));
            let (x, vx) = if from_left {
                (pad.min().x - 25.0 + depth, speed)
            } else {
                (pad.max().x + 25.0 - depth, -speed)
            };
            let mut body = rocket_at(Vec2::new(x, 720.0 + dy), Vec2::new(vx, 0.0));
            prop_assume!(is_colliding(&body.aabb(), &pad));

            let flags = resolve_x(&mut body, &[pad], THRESHOLD);
            prop_assert_eq!(flags.right, from_left);
            prop_assert_eq!(flags.left, !from_left);
            prop_assert!(body.aabb().gap(&pad).x >= -1e-3);
            prop_assert_eq!(body.velocity.x, 0.0);
        }
    }
}
