//! Guardian of the Cosmos entry point
//!
//! Native builds run a headless round: the autopilot plays, the simulation
//! advances in lock-step, and a render snapshot is captured after every tick.
//! A windowed frontend plugs its own keyboard into `InputLatch::sample`
//! and its own clock into `FrameClock` in place of the scripted ones here.

use std::process::ExitCode;

use cosmos_guardian::consts::WINDOW_NAME;
use cosmos_guardian::renderer::{FrameSnapshot, MeshRegistry, SceneMeshes, draw_list};
use cosmos_guardian::sim::{GamePhase, GameState, autopilot_input, tick};
use cosmos_guardian::{FrameClock, Settings};

/// Settings file used when no path is given
const DEFAULT_SETTINGS_PATH: &str = "cosmos_guardian.json";
/// Simulated frame rate of the headless loop
const HEADLESS_FPS: f64 = 60.0;
/// Give up after this many simulated seconds
const MAX_ROUND_SECONDS: f64 = 180.0;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("{} (headless) starting...", WINDOW_NAME);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = match Settings::load_or_default(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load settings from {}: {}", path, e);
            return ExitCode::from(255);
        }
    };

    let aspect = settings.aspect_ratio();
    log::info!(
        "Screen {}x{}, aspect ratio {:.3}",
        settings.screen_width,
        settings.screen_height,
        aspect
    );

    let mut state = GameState::new(settings.seed, settings.tuning.clone(), aspect);

    let mut registry = MeshRegistry::new();
    let meshes = match SceneMeshes::register(&mut registry, &state) {
        Ok(meshes) => meshes,
        Err(e) => {
            log::error!("Failed to build meshes: {}", e);
            return ExitCode::from(255);
        }
    };
    let packed = registry.pack();
    log::info!(
        "Packed {} vertices / {} indices",
        packed.vertices.len(),
        packed.indices.len()
    );

    let mut clock = FrameClock::new(settings.max_frame_delta);
    let frame_time = 1.0 / HEADLESS_FPS;
    let max_frames = (MAX_ROUND_SECONDS * HEADLESS_FPS) as u64;
    let mut now = 0.0;
    clock.advance(now);

    for _ in 0..max_frames {
        now += frame_time;
        let dt = clock.advance(now);

        // Update, then render from the updated state
        let input = autopilot_input(&state);
        tick(&mut state, &input, dt);

        let frame = FrameSnapshot::capture(&state);
        if let Err(e) = draw_list(&meshes, &packed, &frame) {
            log::error!("Draw list failed: {}", e);
            return ExitCode::from(255);
        }

        for event in &state.events {
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }

        if settings.show_fps && clock.window_complete() {
            if let Some(stats) = clock.stats() {
                log::info!(
                    "FPS: {:.0}, MIN: {:.0}, MAX: {:.0}",
                    stats.avg,
                    stats.min,
                    stats.max
                );
            }
        }

        if state.phase.is_terminal() {
            break;
        }
    }

    log::info!(
        "Round over after {:.1}s: {:?} (player health {:.2}, {} of {} enemies left, {} dropped spawns)",
        state.elapsed,
        state.phase,
        state.player.health,
        state.active_enemy_count(),
        state.enemies.len(),
        state.player_bullets.dropped_spawns + state.enemy_bullets.dropped_spawns,
    );

    if state.phase == GamePhase::Lost {
        log::info!("Loss reason: {:?}", state.loss_reason);
    }
    // Legacy codes: 0 for win/quit, -1 (255) for loss; running out of time counts as clean
    match state.phase.exit_code() {
        Some(code) => ExitCode::from(code as u8),
        None => ExitCode::SUCCESS,
    }
}
