//! runner-16: a tiny fixed-timestep tile platformer
//!
//! One controllable character, one static tile level, NES-style logical
//! resolution (256x240 drawn at 3x). The loop paces real time to a ~16 ms
//! tick, feeds the measured delta into the simulation, and renders the
//! resulting state.

mod game;
mod input;
mod math;
mod render;
mod world;

use std::path::Path;

use macroquad::prelude::*;

use game::GameState;
use render::{Assets, WINDOW_SCALE};
use world::{levels, PhysicsSettings, TileGrid, RENDER_H, RENDER_W};

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick budget in seconds (~60 Hz)
const TICK_SECONDS: f64 = 0.016;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("runner-16 v{}", VERSION),
        window_width: RENDER_W * WINDOW_SCALE,
        window_height: RENDER_H * WINDOW_SCALE,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging first
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let grid = match TileGrid::parse(&levels::OVERWORLD) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Bad level layout: {}", err);
            return;
        }
    };

    let settings = match PhysicsSettings::load_or_default(Path::new("assets/physics.ron")) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Bad physics settings: {}", err);
            return;
        }
    };

    let assets = Assets::generate();
    let mut state = GameState::new(math::Vec2::ZERO);

    let mut frame_start = get_time();

    loop {
        // Pace to the tick budget: sleep for the bulk, spin for precision
        let remaining = TICK_SECONDS - (get_time() - frame_start);
        if remaining > 0.0 {
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < TICK_SECONDS {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while get_time() - frame_start < TICK_SECONDS {
                    std::hint::spin_loop();
                }
            }
            #[cfg(target_arch = "wasm32")]
            {
                while get_time() - frame_start < TICK_SECONDS {
                    // Busy wait - browser handles frame pacing
                }
            }
        }

        let now = get_time();
        let dt = (now - frame_start) as f32;
        frame_start = now;

        let tick_input = input::poll();
        state.tick(&grid, &settings, &tick_input, dt);

        render::draw_frame(&state, &grid, &assets);

        next_frame().await;
    }
}
