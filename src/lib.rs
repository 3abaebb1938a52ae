//! StarCall - a vertically scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `game`: Frame driver tying the simulation to the high score store
//! - `render`: Read-only frame views for an external renderer
//! - `persistence`: High score record on disk
//! - `platform`: Data directory resolution
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Playfield configuration constants
pub mod consts {
    /// Logical playfield width in pixels
    pub const SURFACE_WIDTH: f32 = 160.0;
    /// Logical playfield height in pixels
    pub const SURFACE_HEIGHT: f32 = 240.0;
    /// Wall tile edge; also the horizontal margin of the playfield
    pub const TILE_SIZE: f32 = 16.0;
    /// Frames per second the simulation is stepped at
    pub const DEFAULT_FPS: u32 = 60;
}

/// Move `current` toward `target` by at most `step`, never overshooting.
#[inline]
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= step {
        target
    } else if delta > 0.0 {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}
