//! Telemetry readout and end-of-mission banner

use glam::Vec2;

use super::vertex::colors;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{Canvas, Color, TextureInfo};
use crate::sim::{GameOverReason, Rocket};

const HUD_FONT_SIZE: f32 = 20.0;
const BANNER_FONT_SIZE: f32 = 50.0;
const LINE_SPACING: f32 = 30.0;

/// A line of text placed on screen
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub position: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Fuel on the left; altitude and speeds stacked on the right
pub fn telemetry(rocket: &Rocket) -> Vec<HudLine> {
    let position = rocket.body.position;
    let velocity = rocket.body.velocity;
    let right = SCREEN_WIDTH - 300.0;

    let line = |text: String, x: f32, row: usize| HudLine {
        text,
        position: Vec2::new(x, 20.0 + row as f32 * LINE_SPACING),
        size: HUD_FONT_SIZE,
        color: colors::HUD_TEXT,
    };

    vec![
        line(format!("Fuel: {:04.2}%", rocket.fuel.percent()), 20.0, 0),
        line(format!("Altitude: {:08.2}", crate::altitude(position)), right, 0),
        line(format!("Horizontal Speed: {:08.2}", velocity.x), right, 1),
        line(format!("Vertical Speed: {:08.2}", velocity.y), right, 2),
    ]
}

/// Centered banner announcing how the mission ended
pub fn banner(reason: GameOverReason) -> HudLine {
    let text = reason.banner();
    let color = if reason.is_success() {
        colors::MISSION_ACCOMPLISHED
    } else {
        colors::MISSION_FAILED
    };
    // Rough monospace estimate; the backend's font decides the real width
    let width = text.len() as f32 * BANNER_FONT_SIZE * 0.6;
    HudLine {
        text: text.to_string(),
        position: Vec2::new(SCREEN_WIDTH / 2.0 - width / 2.0, SCREEN_HEIGHT / 2.0),
        size: BANNER_FONT_SIZE,
        color,
    }
}

pub fn draw_lines<T: TextureInfo, C: Canvas<T>>(canvas: &mut C, lines: &[HudLine]) {
    for line in lines {
        canvas.draw_text(&line.text, line.position, line.size, line.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_telemetry_text() {
        let mut state = GameState::new(Tuning::default());
        state.rocket.body.position.y = 500.0;
        state.rocket.body.velocity = Vec2::new(-3.0, 12.5);
        state.rocket.fuel.set_level(99.5);

        let lines: Vec<String> = telemetry(&state.rocket).into_iter().map(|l| l.text).collect();
        assert_eq!(
            lines,
            vec![
                "Fuel: 99.50%",
                "Altitude: 00300.00",
                "Horizontal Speed: -0003.00",
                "Vertical Speed: 00012.50",
            ]
        );
    }

    #[test]
    fn test_banner_colors() {
        let landed = banner(GameOverReason::LandedSuccessfully);
        assert_eq!(landed.text, "MISSION ACCOMPLISHED: LANDED SUCCESSFULLY");
        assert_eq!(landed.color, colors::MISSION_ACCOMPLISHED);

        for reason in [
            GameOverReason::Crashed,
            GameOverReason::OutOfBounds,
            GameOverReason::OutOfFuel,
        ] {
            let line = banner(reason);
            assert_eq!(line.color, colors::MISSION_FAILED);
            assert!(line.text.starts_with("MISSION FAILED"));
            assert!(line.position.x > 0.0);
        }
    }
}
