//! Debris particles
//!
//! Used for the player's death burst. A particle either lives for a fixed
//! number of ticks or until it leaves the surface entirely.

use glam::Vec2;

use super::entity::{Body, Facing};
use super::rect::Rect;
use super::sprite::Sprite;
use crate::approach;

/// How long a particle lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifespan {
    /// Lives until it is fully off the surface
    Infinite,
    /// Ticks remaining
    Ticks(u32),
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees
    pub angle: f32,
    /// Degrees per tick
    pub rotation: f32,
    /// Horizontal drag per tick
    pub drag: f32,
    pub gravity: f32,
    pub lifespan: Lifespan,
    pub sprite: Sprite,
    pub hitbox: Rect,
    pub hitbox_rect: Rect,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, sprite: Sprite) -> Self {
        let size = sprite.size();
        let hitbox = Rect::new(-size.x / 2.0, -size.y / 2.0, size.x, size.y);
        Self {
            pos,
            vel,
            angle: 0.0,
            rotation: 0.0,
            drag: 0.0,
            gravity: 0.0,
            lifespan: Lifespan::Infinite,
            sprite,
            hitbox,
            hitbox_rect: hitbox.offset_by(pos),
        }
    }

    pub fn with_lifespan(mut self, lifespan: Lifespan) -> Self {
        self.lifespan = lifespan;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Count down a finite lifespan; returns false once the particle has expired
    pub fn tick_lifespan(&mut self) -> bool {
        match &mut self.lifespan {
            Lifespan::Ticks(0) => false,
            Lifespan::Ticks(n) => {
                *n -= 1;
                true
            }
            Lifespan::Infinite => true,
        }
    }

    /// Integrate with this tick's velocity, then apply drag, gravity and spin
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.vel.x = approach(self.vel.x, 0.0, self.drag);
        self.vel.y += self.gravity;
        self.angle += self.rotation;
    }

    pub fn update_hitbox(&mut self) {
        self.hitbox_rect = self.hitbox.offset_by(self.pos);
    }
}

impl Body for Particle {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn facing(&self) -> Facing {
        Facing::Right
    }

    fn angle(&self) -> f32 {
        self.angle
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }

    fn hitbox_rect(&self) -> Rect {
        self.hitbox_rect
    }
}
