//! Nova Barrage entry point
//!
//! The simulation core is headless; wiring a windowed front-end means
//! implementing the `AssetLoader` trait and draining `build_frame`
//! commands each frame. Until then the native binary runs an autopilot
//! demo of the simulation and logs its progress.

use std::path::Path;

use nova_barrage::assets::{AssetCatalog, DirectoryLoader};
use nova_barrage::render;
use nova_barrage::render::starfield::Starfield;
use nova_barrage::settings::Settings;
use nova_barrage::sim::{GamePhase, GameState, TickInput, tick};

const SETTINGS_PATH: &str = "settings.json";
const DEMO_SEED: u64 = 0xB0BA;
const DT: f32 = 1.0 / 60.0;
/// Autopilot runs at most this long
const DEMO_SECONDS: f32 = 120.0;

/// Steer toward the nearest enemy's column and hold fire; dodge nothing.
/// Good enough to exercise every system in a demo run.
fn autopilot(state: &GameState) -> TickInput {
    let target_x = state
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|enemy| enemy.pos.x);

    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };
    if let Some(x) = target_x {
        if x < state.player.pos.x - 5.0 {
            input.left = true;
        } else if x > state.player.pos.x + 5.0 {
            input.right = true;
        }
    }
    input
}

fn main() {
    env_logger::init();
    log::info!("Nova Barrage starting...");

    let settings = Settings::load_or_default(Path::new(SETTINGS_PATH));
    log::info!("quality preset: {}", settings.quality.as_str());

    // A windowed front-end must treat a load failure as fatal; the
    // headless demo can only report it and skip frame building.
    let mut loader = DirectoryLoader::new("assets");
    let catalog = match AssetCatalog::load(&mut loader) {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            log::warn!("asset catalog unavailable ({e}); running simulation only");
            None
        }
    };

    let mut state = GameState::new(DEMO_SEED);
    state
        .particles
        .set_cap(settings.quality.particle_budget());
    state.particles.set_trail_enabled(settings.engine_trail);
    let mut stars = Starfield::new(DEMO_SEED);

    let mut frame = 0u32;
    while state.phase == GamePhase::Playing && state.time < DEMO_SECONDS {
        let input = autopilot(&state);
        tick(&mut state, &input, DT);
        stars.update(DT);

        if let Some(catalog) = &catalog {
            let commands = render::build_frame(&state, &stars, catalog, &settings);
            if frame == 0 {
                log::info!("first frame: {} draw commands", commands.len());
            }
        }

        frame += 1;
        if frame % 600 == 0 {
            log::info!(
                "t={:>5.1}s score={} wave={} lives={} enemies={}",
                state.time,
                state.score,
                state.wave,
                state.player.lives,
                state.enemies.len()
            );
        }
    }

    println!(
        "demo finished: score {}, wave {}, lives {}, {:.1}s simulated",
        state.score, state.wave, state.player.lives, state.time
    );
}
