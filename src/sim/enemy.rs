//! EyeBat enemies
//!
//! Alive, an enemy patrols side to side while the world carries it upward.
//! Once killed it becomes a corpse that falls under gravity until it leaves
//! the surface.

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Facing};
use super::rect::Rect;
use super::sprite::{EYEBAT_FRAMES, EnemySprite, Sprite};
use crate::consts::*;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// x = patrol speed (signed), y = rise speed (positive moves up the screen)
    pub vel: Vec2,
    pub facing: Facing,
    pub dead: bool,
    pub frame: u8,
    pub anim_clock: u32,
    pub anim_speed: u32,
    pub hitbox: Rect,
    pub hitbox_rect: Rect,
}

impl Enemy {
    /// Create an enemy drifting with the world at `scroll_speed`
    pub fn new(pos: Vec2, facing: Facing, frame: u8, tuning: &Tuning) -> Self {
        let hitbox = tuning.enemy.hitbox.rect();
        Self {
            pos,
            vel: Vec2::new(tuning.enemy.patrol_speed * facing.sign(), tuning.scroll_speed),
            facing,
            dead: false,
            frame: frame % EYEBAT_FRAMES,
            anim_clock: 0,
            anim_speed: tuning.enemy.anim_speed,
            hitbox,
            hitbox_rect: hitbox.offset_by(pos),
        }
    }

    /// Create an enemy with random facing and animation phase
    pub fn spawn(pos: Vec2, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let facing = if rng.random_bool(0.5) {
            Facing::Left
        } else {
            Facing::Right
        };
        let frame = rng.random_range(0..EYEBAT_FRAMES);
        Self::new(pos, facing, frame, tuning)
    }

    pub fn move_and_collide(&mut self, gravity: f32) {
        if !self.dead {
            let predicted = self.pos.x + self.vel.x + self.hitbox.w / 2.0 * self.facing.sign();
            if predicted > SURFACE_WIDTH - TILE_SIZE || predicted < TILE_SIZE {
                self.vel.x = -self.vel.x;
                self.facing = self.facing.flipped();
            }
        } else {
            self.vel.y -= gravity;
        }
        self.pos.x += self.vel.x;
        self.pos.y -= self.vel.y;
    }

    /// Advance the flap cycle; the frame changes once every `anim_speed` ticks
    pub fn animate(&mut self) {
        if self.anim_clock == 0 {
            self.anim_clock = self.anim_speed;
            self.frame = if self.frame + 1 >= EYEBAT_FRAMES {
                0
            } else {
                self.frame + 1
            };
        }
        self.anim_clock = self.anim_clock.saturating_sub(1);
    }

    /// Turn into a corpse, converting the rise speed into a doubled launch
    pub fn kill(&mut self) {
        self.dead = true;
        self.vel.y *= 2.0;
    }

    /// Alive and carried past the top edge
    pub fn scrolled_off_top(&self) -> bool {
        !self.dead && self.pos.y <= -TILE_SIZE
    }

    pub fn update_hitbox(&mut self) {
        self.hitbox_rect = self.hitbox.offset_by(self.pos);
    }
}

impl Body for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn facing(&self) -> Facing {
        self.facing
    }

    fn angle(&self) -> f32 {
        0.0
    }

    fn sprite(&self) -> Sprite {
        EnemySprite::EyeBat { frame: self.frame }.into()
    }

    fn hitbox_rect(&self) -> Rect {
        self.hitbox_rect
    }
}
