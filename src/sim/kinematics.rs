//! Semi-implicit Euler integration

use glam::Vec2;

/// Advance velocity by acceleration, then position by the new velocity
#[inline]
pub fn integrate(position: &mut Vec2, velocity: &mut Vec2, acceleration: Vec2, dt: f32) {
    *velocity += acceleration * dt;
    *position += *velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_updates_before_position() {
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::new(1.0, 0.0);
        integrate(&mut pos, &mut vel, Vec2::new(0.0, 10.0), 0.5);
        assert_eq!(vel, Vec2::new(1.0, 5.0));
        assert_eq!(pos, Vec2::new(0.5, 2.5));
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let mut pos = Vec2::new(3.0, 4.0);
        let mut vel = Vec2::new(-2.0, 1.0);
        integrate(&mut pos, &mut vel, Vec2::new(0.0, 10.0), 0.0);
        assert_eq!(pos, Vec2::new(3.0, 4.0));
        assert_eq!(vel, Vec2::new(-2.0, 1.0));
    }
}
