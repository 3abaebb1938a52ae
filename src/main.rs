//! StarCall entry point
//!
//! Windowing and sprites are supplied by a front end; this binary runs the
//! game headless with a simple autopilot at the controls, logging the HUD,
//! and keeps the high score record up to date.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use starcall::persistence::FileStore;
use starcall::render::{Frame, Hud, Renderer};
use starcall::sim::{GameState, TickInput};
use starcall::{Game, Settings, Tuning, platform};

/// Steers toward the nearest live enemy below and dives onto it
#[derive(Debug)]
struct Autopilot;

impl Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        let player = &state.player;
        let target = state
            .enemies
            .iter()
            .filter(|e| !e.dead && e.pos.y > player.pos.y)
            .min_by(|a, b| {
                let da = a.pos.distance_squared(player.pos);
                let db = b.pos.distance_squared(player.pos);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(enemy) = target else {
            return TickInput::default();
        };
        let dx = enemy.pos.x - player.pos.x;
        TickInput {
            left: dx < -2.0,
            right: dx > 2.0,
            down: dx.abs() < 8.0 && enemy.pos.y - player.pos.y < 60.0,
            ..Default::default()
        }
    }
}

/// Logs the HUD once per second of game time
struct LogRenderer {
    fps: u64,
    frames: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.frames % self.fps == 0 {
            log::debug!(
                "score {} | {} | enemies {} | particles {}{}",
                frame.hud.score,
                frame.hud.to_beat_text(),
                frame.enemies.len(),
                frame.particles.len(),
                if frame.hud.game_over {
                    format!(" | {} ({})", Hud::GAME_OVER_TITLE, Hud::GAME_OVER_HINT)
                } else {
                    String::new()
                }
            );
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("StarCall (headless) starting...");
    log::info!("Data directory: {}", platform::data_dir().display());

    let settings = Settings::load_or_default(&platform::settings_path());
    let tuning = Tuning::load_or_default(&platform::tuning_path());
    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!("Started new game with seed: {}", seed);

    let store = FileStore::new(platform::high_score_path());
    log::info!("High score record: {}", store.path().display());
    let mut game = Game::new(GameState::with_tuning(seed, tuning), store)
        .with_debug_overlay(settings.debug_overlay);
    let mut pilot = Autopilot;
    let mut renderer = LogRenderer {
        fps: settings.fps.max(1) as u64,
        frames: 0,
    };

    let frame_time = settings.frame_duration();
    let mut linger = 0;
    while game.is_running() {
        let started = Instant::now();

        let mut input = pilot.poll(&game.state);
        if game.state.time_ticks >= settings.max_ticks || linger >= settings.linger_ticks {
            input.quit_requested = true;
        }
        game.step(&input);
        renderer.draw(&game.frame());

        if game.state.is_game_over() {
            linger += 1;
        }
        if settings.realtime {
            if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    log::info!(
        "Run over after {} ticks: score {}, best {}{}",
        game.state.time_ticks,
        game.state.score,
        game.high_score(),
        if game.new_record() { " (new record)" } else { "" }
    );
}
