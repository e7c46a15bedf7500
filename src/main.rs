//! Hungry Bird: a tiny side-scrolling arcade game
//!
//! Keep the bird in the air with SPACE and eat the drifting food before the
//! time bar runs out. Touching the ground or running out of time sends you
//! back to the title screen.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod game;
mod input;
mod render;

use macroquad::prelude::*;
use assets::Assets;
use config::{FpsLimit, GameConfig};
use game::{GameEvent, World};

fn window_conf() -> Conf {
    Conf {
        window_title: "Hungry Bird!".to_string(),
        window_width: game::constants::SCREEN_WIDTH as i32,
        window_height: game::constants::SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== Hungry Bird v{} ===", VERSION);

    let config = load_config();
    log::info!("Tick rate: {}", config.fps_limit.label());

    let assets = match Assets::load(&config.asset_dir).await {
        Ok(assets) => assets,
        Err(e) => {
            report_fatal(&startup_failure(&e, &config.asset_dir));
            return;
        }
    };

    // Window close goes through the input queue like the quit key
    prevent_quit();

    let seed = config
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
    let mut world = World::new(seed);

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        world.handle_inputs(input::poll());
        world.tick();
        log_events(&mut world);

        render::draw_frame(&world, &assets);

        if !world.is_running() {
            break;
        }

        limit_frame_rate(frame_start, config.fps_limit);
        next_frame().await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> GameConfig {
    GameConfig::load_or_default(std::path::Path::new(config::CONFIG_FILE))
}

/// No filesystem on the web: always defaults
#[cfg(target_arch = "wasm32")]
fn load_config() -> GameConfig {
    GameConfig::default()
}

fn startup_failure(err: &assets::AssetError, asset_dir: &str) -> String {
    format!("Cannot start: {} (asset folder: {})", err, asset_dir)
}

#[cfg(not(target_arch = "wasm32"))]
fn report_fatal(message: &str) {
    log::error!("{}", message);
}

/// No logger is installed on the web; write straight to the browser console
#[cfg(target_arch = "wasm32")]
fn report_fatal(message: &str) {
    macroquad::logging::error!("{}", message);
}

fn log_events(world: &mut World) {
    for event in world.drain_events() {
        match event {
            GameEvent::Started => log::info!("Run started"),
            GameEvent::ItemCollected { score } => log::debug!("Food eaten, score {}", score),
            GameEvent::GameOver { reason, score } => {
                log::info!("Game over: {} with score {}", reason.label(), score)
            }
            GameEvent::Quit => log::info!("Quit requested"),
        }
    }
}

/// Wait out the rest of this tick's time slice. No catch-up when a frame
/// runs long: the next tick simply starts late.
fn limit_frame_rate(frame_start: f64, fps_limit: FpsLimit) {
    let Some(target_frame_time) = fps_limit.frame_time() else { return };
    if get_time() - frame_start >= target_frame_time {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: just spin-wait (no thread::sleep available)
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
}
