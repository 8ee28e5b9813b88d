//! Lunar Lander - headless demo
//!
//! Flies the default mission with the autopilot on a simulated clock,
//! recording every frame into a vertex batch, and logs how it ended.

use std::error::Error;
use std::path::Path;

use lunar_lander::platform::{Autopilot, HeadlessTextureLoader, ManualClock};
use lunar_lander::renderer::{SceneSprites, VertexBatch};
use lunar_lander::sim::GameState;
use lunar_lander::{AppStatus, GameLoop, Settings};

/// Simulated seconds before the demo gives up
const MAX_DEMO_SECONDS: f64 = 180.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    let config = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Settings::FILE_NAME.to_string());
    let settings = Settings::load_or_default(Path::new(&config));

    let mut state = GameState::new(settings.tuning.clone());
    let mut loader = HeadlessTextureLoader::with_default_assets();
    let sprites = SceneSprites::load(&mut loader, &state)?;
    let mut batch = VertexBatch::new();

    let frame_time = 1.0 / settings.target_fps.max(1) as f64;
    let max_frames = (MAX_DEMO_SECONDS / frame_time) as u64;
    let mut game = GameLoop::new(ManualClock::new(), Autopilot::new(), &settings);

    while game.frames() < max_frames {
        game.clock_mut().advance(frame_time);
        if game.run_frame(&mut state) == AppStatus::Terminated {
            break;
        }
        sprites.render(&mut batch, &state, &settings);
    }

    let seconds = state.time_ticks as f32 * settings.fixed_timestep;
    match state.outcome() {
        Some(reason) => log::info!("{} after {:.1}s", reason.banner(), seconds),
        None => log::warn!("Demo stopped after {:.1}s without an outcome", seconds),
    }
    log::info!(
        "Final frame: {} vertices in {} draw calls, fuel {:.2}%",
        batch.vertices().len(),
        batch.draws().len(),
        state.rocket.fuel.percent()
    );

    Ok(())
}
