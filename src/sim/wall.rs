//! Scrolling cloud walls and the enemy spawner
//!
//! Walls line both sides of the playfield. Each one scrolls upward and wraps to
//! the bottom when it leaves the top; every wrap is a chance to spawn an enemy.

use glam::Vec2;
use rand::Rng;

use super::enemy::Enemy;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which side of the playfield a wall lines (the right side is mirrored)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Wall {
    /// Anchor: top-left for left walls, top-right for right walls
    pub pos: Vec2,
    pub side: WallSide,
    pub scroll_speed: f32,
}

impl Wall {
    pub fn new(pos: Vec2, scroll_speed: f32) -> Self {
        let side = if pos.x > SURFACE_WIDTH / 2.0 {
            WallSide::Right
        } else {
            WallSide::Left
        };
        Self {
            pos,
            side,
            scroll_speed,
        }
    }

    /// Scroll up; returns true when the wall wrapped back to the bottom
    pub fn scroll(&mut self) -> bool {
        self.pos.y -= self.scroll_speed;
        if self.pos.y <= -TILE_SIZE {
            self.pos.y = SURFACE_HEIGHT - 1.0;
            true
        } else {
            false
        }
    }

    /// Scroll and, on wrap, roll for an enemy spawn just below the bottom edge
    pub fn move_and_spawn(
        &mut self,
        enemies: &mut Vec<Enemy>,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) {
        if !self.scroll() {
            return;
        }
        let chance = spawn_probability(
            enemies.len(),
            tuning.target_enemy_count as usize,
            tuning.enemy_spawn_chance,
        );
        let roll = rng.random_range(0..100u32);
        if (roll as f32) < chance * 100.0 {
            let x = rng.random_range(TILE_SIZE as u32..(SURFACE_WIDTH - TILE_SIZE) as u32) as f32;
            let pos = Vec2::new(x, self.pos.y + TILE_SIZE);
            log::debug!("Spawning enemy at ({}, {}), {} live", pos.x, pos.y, enemies.len());
            enemies.push(Enemy::spawn(pos, tuning, rng));
        }
    }
}

/// Per-wrap spawn probability, rising as the live count falls below target
///
/// The base chance is scaled by how far the population is from the target and
/// clamped to `[0, 1]`, so an over-populated field never spawns.
pub fn spawn_probability(current: usize, target: usize, base_chance: f32) -> f32 {
    let deficit = target as f32 - current as f32;
    (base_chance + deficit * base_chance).clamp(0.0, 1.0)
}

/// Build the initial wall columns covering the full height plus one tile
pub fn build_walls(scroll_speed: f32) -> Vec<Wall> {
    let rows = (SURFACE_HEIGHT / TILE_SIZE) as usize + 1;
    let mut walls = Vec::with_capacity(rows * 2);
    for i in 0..rows {
        let y = TILE_SIZE * i as f32;
        walls.push(Wall::new(Vec2::new(0.0, y), scroll_speed));
        walls.push(Wall::new(Vec2::new(SURFACE_WIDTH, y), scroll_speed));
    }
    walls
}
