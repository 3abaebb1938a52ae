//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one `GameState`, built once at
//! startup and passed explicitly to `tick`.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::enemy::Enemy;
use super::particle::Particle;
use super::player::Player;
use super::wall::{Wall, build_walls};
use crate::tuning::Tuning;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    EnemySpawned,
    EnemyKilled,
    /// Fired once, on the tick the player dies
    PlayerDied { score: u64 },
}

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Live enemies, unordered
    pub enemies: Vec<Enemy>,
    pub walls: Vec<Wall>,
    /// Live particles, unordered
    pub particles: Vec<Particle>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    /// Scratch buffer of enemy indices to sweep after the update pass
    pub(crate) condemned: Vec<usize>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            score: 0,
            time_ticks: 0,
            player: Player::spawn(&tuning),
            enemies: Vec::new(),
            walls: build_walls(tuning.scroll_speed),
            particles: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            condemned: Vec::new(),
            tuning,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.player.dead
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
