//! Shared entity vocabulary

use glam::Vec2;

use super::rect::Rect;
use super::sprite::Sprite;

/// Horizontal facing / steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Vertical steering intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    /// Ride the updraft
    Up,
    /// Dive
    Down,
}

/// Anything that is drawn as a sprite and collides through a hitbox
pub trait Body {
    fn pos(&self) -> Vec2;
    fn facing(&self) -> Facing;
    /// Visual lean in degrees
    fn angle(&self) -> f32;
    fn sprite(&self) -> Sprite;
    /// Absolute hitbox as of the last recompute
    fn hitbox_rect(&self) -> Rect;

    /// Bounding rect of the sprite as drawn (rotated about its center)
    fn sprite_rect(&self) -> Rect {
        let size = self.sprite().rotated_size(self.angle());
        Rect::centered(self.pos(), size.x, size.y)
    }
}
