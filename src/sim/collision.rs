//! Hit detection and resolution
//!
//! Resolution runs per enemy, right after that enemy's own movement, so the
//! enemy's hitbox is always current when it is tested.

use glam::Vec2;
use rand::Rng;

use super::enemy::Enemy;
use super::entity::Body;
use super::particle::{Lifespan, Particle};
use super::player::Player;
use super::rect::Rect;
use super::sprite::DeathSprite;
use crate::tuning::Tuning;

/// Outcome of testing one live enemy against the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    None,
    /// The player's dive struck the enemy
    EnemyKilled,
    /// The enemy touched the player's body
    PlayerKilled,
}

/// True when the body's drawn sprite no longer touches `bounds` at all
pub fn outside_surface(bounds: &Rect, body: &impl Body) -> bool {
    !bounds.overlaps(&body.sprite_rect())
}

/// Test a live enemy against the player and apply the resulting state changes
///
/// At most one branch fires: a killed enemy cannot also kill the player.
/// Score and death side effects (particles, events) are left to the caller.
pub fn resolve_enemy(player: &mut Player, enemy: &mut Enemy, tuning: &Tuning) -> Hit {
    if enemy.dead || player.dead {
        return Hit::None;
    }
    if let Some(attack) = player.attack_rect {
        if enemy.hitbox_rect.overlaps(&attack) {
            enemy.kill();
            player.vel.y -= tuning.kill_recoil;
            return Hit::EnemyKilled;
        }
    }
    if enemy.hitbox_rect.overlaps(&player.hitbox_rect) {
        player.dead = true;
        return Hit::PlayerKilled;
    }
    Hit::None
}

/// The two halves of the player flung apart on death
pub fn death_particles(at: Vec2, gravity: f32, rng: &mut impl Rng) -> [Particle; 2] {
    DeathSprite::ALL.map(|sprite| {
        let hspd = 0.2 * rng.random_range(-6..=6i32) as f32;
        let vspd = 0.5 * rng.random_range(-5..=0i32) as f32;
        let rotation = rng.random_range(-10..=10i32) as f32;
        Particle::new(at, Vec2::new(hspd, vspd), sprite.into())
            .with_lifespan(Lifespan::Infinite)
            .with_drag(0.0)
            .with_gravity(gravity)
            .with_rotation(rotation)
    })
}
