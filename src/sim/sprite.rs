//! Sprite tags
//!
//! The simulation never touches image data. Each entity carries a tag naming
//! the frame it wants drawn; the renderer maps tags to loaded assets. Sizes are
//! the logical pixel dimensions of the source images and feed the off-surface
//! test and particle hitboxes.

use glam::Vec2;

/// Number of frames in the EyeBat flap cycle
pub const EYEBAT_FRAMES: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSprite {
    /// Umbrella open, drifting
    Slowfall,
    /// Umbrella closed, diving
    Freefall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemySprite {
    EyeBat { frame: u8 },
}

/// The two halves the player splits into on death
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathSprite {
    Body,
    Umbrella,
}

impl DeathSprite {
    pub const ALL: [DeathSprite; 2] = [DeathSprite::Body, DeathSprite::Umbrella];
}

/// Any drawable frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player(PlayerSprite),
    Enemy(EnemySprite),
    Death(DeathSprite),
    CloudTile,
}

impl Sprite {
    /// Unrotated image size in logical pixels
    pub fn size(&self) -> Vec2 {
        match self {
            Sprite::Player(PlayerSprite::Slowfall) => Vec2::new(16.0, 24.0),
            Sprite::Player(PlayerSprite::Freefall) => Vec2::new(16.0, 48.0),
            Sprite::Enemy(_) => Vec2::new(16.0, 18.0),
            Sprite::Death(DeathSprite::Body) => Vec2::new(16.0, 16.0),
            Sprite::Death(DeathSprite::Umbrella) => Vec2::new(16.0, 12.0),
            Sprite::CloudTile => Vec2::new(16.0, 16.0),
        }
    }

    /// Size of the bounding box once rotated by `angle` degrees about its center
    pub fn rotated_size(&self, angle: f32) -> Vec2 {
        let size = self.size();
        let (sin, cos) = angle.to_radians().sin_cos();
        Vec2::new(
            size.x * cos.abs() + size.y * sin.abs(),
            size.x * sin.abs() + size.y * cos.abs(),
        )
    }
}

impl From<PlayerSprite> for Sprite {
    fn from(s: PlayerSprite) -> Self {
        Sprite::Player(s)
    }
}

impl From<EnemySprite> for Sprite {
    fn from(s: EnemySprite) -> Self {
        Sprite::Enemy(s)
    }
}

impl From<DeathSprite> for Sprite {
    fn from(s: DeathSprite) -> Self {
        Sprite::Death(s)
    }
}
