//! Data-driven game balance
//!
//! Every gameplay constant lives here so it can be overridden from a
//! `tuning.json` next to the high score record. Missing fields keep their
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Relative hitbox as `(dx, dy, w, h)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitboxSpec(pub f32, pub f32, pub f32, pub f32);

impl HitboxSpec {
    pub fn rect(&self) -> Rect {
        Rect::new(self.0, self.1, self.2, self.3)
    }
}

/// Player handling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_hspd: f32,
    pub max_vspd: f32,
    /// Horizontal acceleration per tick
    pub spd_buildup_h: f32,
    /// Vertical acceleration per tick
    pub spd_buildup_v: f32,
    /// Horizontal drag per tick when not steering
    pub horizontal_resistance: f32,
    /// Maximum lean in degrees
    pub max_angle: f32,
    /// Lean change per tick in degrees
    pub rotation_spd: f32,
    pub hitbox: HitboxSpec,
    pub attack_hitbox: HitboxSpec,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_hspd: 2.0,
            max_vspd: 1.0,
            spd_buildup_h: 0.2,
            spd_buildup_v: 0.5,
            horizontal_resistance: 0.075,
            max_angle: 35.0,
            rotation_spd: 1.5,
            hitbox: HitboxSpec(-4.0, -2.0, 9.0, 9.0),
            attack_hitbox: HitboxSpec(-1.0, 21.0, 3.0, 3.0),
        }
    }
}

/// Enemy behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Horizontal patrol speed
    pub patrol_speed: f32,
    /// Ticks per animation frame
    pub anim_speed: u32,
    pub hitbox: HitboxSpec,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            patrol_speed: 1.0,
            anim_speed: 6,
            hitbox: HitboxSpec(-6.0, -8.0, 13.0, 17.0),
        }
    }
}

/// World and scoring constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Upward world scroll per tick
    pub scroll_speed: f32,
    /// Base spawn chance per wall wrap (0-1)
    pub enemy_spawn_chance: f32,
    /// Live enemy count the spawner steers toward
    pub target_enemy_count: u32,
    /// Extra upward pull on the player when not diving
    pub upwards_draft_strength: f32,
    /// Highest point the player can rise to
    pub stable_altitude: f32,
    /// Downward acceleration for corpses and debris
    pub gravity: f32,
    pub score_per_tick: u64,
    pub kill_bonus: u64,
    /// Upward kick given to the player on a kill
    pub kill_recoil: f32,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scroll_speed: 1.0,
            enemy_spawn_chance: 0.1,
            target_enemy_count: 3,
            upwards_draft_strength: 3.0,
            stable_altitude: 50.0,
            gravity: 0.05,
            score_per_tick: 1,
            kill_bonus: 100,
            kill_recoil: 6.0,
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from disk, falling back to defaults if absent or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
