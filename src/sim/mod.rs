//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering, file or platform dependencies

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod particle;
pub mod player;
pub mod rect;
pub mod sprite;
pub mod state;
pub mod tick;
pub mod wall;

pub use collision::{Hit, death_particles, outside_surface, resolve_enemy};
pub use enemy::Enemy;
pub use entity::{Body, Facing, Vertical};
pub use particle::{Lifespan, Particle};
pub use player::Player;
pub use rect::Rect;
pub use sprite::{DeathSprite, EnemySprite, PlayerSprite, Sprite};
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
pub use wall::{Wall, WallSide, build_walls, spawn_probability};
