//! Runtime settings and preferences
//!
//! Persisted as `settings.json` in the data directory. Gameplay balance lives
//! in `tuning` instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FPS;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation steps per second
    pub fps: u32,
    /// Start with the hitbox overlay on
    pub debug_overlay: bool,
    /// RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Tick cap for the headless runner
    pub max_ticks: u64,
    /// Ticks to keep the game-over scene running before the headless runner exits
    pub linger_ticks: u64,
    /// Pace the headless runner at `fps` instead of running flat out
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            debug_overlay: false,
            seed: None,
            max_ticks: 60 * 60 * 5,
            linger_ticks: 120,
            realtime: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from disk, falling back to defaults if absent or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Frame duration derived from `fps` (a zero fps is treated as 1)
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}
