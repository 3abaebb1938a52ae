//! Read-only views handed to the renderer
//!
//! The renderer owns assets, scaling and fonts. Each frame it receives a
//! `Frame` borrowing the simulation state plus HUD values and, when the debug
//! overlay is on, the hitboxes to outline.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Body, Facing, GameState, Rect, Sprite, Wall, WallSide};

/// One sprite to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteView {
    pub sprite: Sprite,
    /// Center of the sprite
    pub pos: Vec2,
    /// Drawn mirrored when facing left
    pub facing: Facing,
    /// Rotation in degrees
    pub angle: f32,
}

impl SpriteView {
    pub fn of(body: &impl Body) -> Self {
        Self {
            sprite: body.sprite(),
            pos: body.pos(),
            facing: body.facing(),
            angle: body.angle(),
        }
    }

    pub fn of_wall(wall: &Wall) -> Self {
        // Walls anchor on a top corner; convert to a center
        let half = Sprite::CloudTile.size() / 2.0;
        let (pos, facing) = match wall.side {
            WallSide::Left => (wall.pos + half, Facing::Right),
            WallSide::Right => (Vec2::new(wall.pos.x - half.x, wall.pos.y + half.y), Facing::Left),
        };
        Self {
            sprite: Sprite::CloudTile,
            pos,
            facing,
            angle: 0.0,
        }
    }
}

/// Overlay color for debug hitboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayColor {
    White,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRect {
    pub rect: Rect,
    pub color: OverlayColor,
}

/// Heads-up display contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// Score as shown (raw score / 10)
    pub score: u64,
    /// "to beat" value (raw high score / 10)
    pub to_beat: u64,
    pub game_over: bool,
}

impl Hud {
    pub const GAME_OVER_TITLE: &'static str = "GAME OVER";
    pub const GAME_OVER_HINT: &'static str = "Press ESC";

    pub fn new(score: u64, high_score: u64, game_over: bool) -> Self {
        Self {
            score: score / 10,
            to_beat: high_score / 10,
            game_over,
        }
    }

    pub fn to_beat_text(&self) -> String {
        format!("to beat: {}", self.to_beat)
    }

    /// Screen-space anchor for the centered score line
    pub fn score_anchor() -> Vec2 {
        Vec2::new(SURFACE_WIDTH / 2.0, 10.0)
    }

    /// Screen-space anchor for the centered game over banner
    pub fn banner_anchor() -> Vec2 {
        Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0)
    }
}

/// Everything needed to draw one frame, in back-to-front order
#[derive(Debug, Clone)]
pub struct Frame {
    pub walls: Vec<SpriteView>,
    pub enemies: Vec<SpriteView>,
    pub particles: Vec<SpriteView>,
    /// Absent once the player has died
    pub player: Option<SpriteView>,
    pub hud: Hud,
    /// Empty unless the debug overlay is on
    pub debug: Vec<DebugRect>,
}

impl Frame {
    pub fn capture(state: &GameState, high_score: u64, debug_overlay: bool) -> Self {
        let player = &state.player;
        let mut debug = Vec::new();
        if debug_overlay {
            let white = |rect| DebugRect {
                rect,
                color: OverlayColor::White,
            };
            debug.extend(state.enemies.iter().map(|e| white(e.hitbox_rect)));
            debug.extend(state.particles.iter().map(|p| white(p.hitbox_rect)));
            debug.push(white(player.hitbox_rect));
            if let Some(attack) = player.attack_rect {
                debug.push(DebugRect {
                    rect: attack,
                    color: OverlayColor::Red,
                });
            }
        }

        Self {
            walls: state.walls.iter().map(SpriteView::of_wall).collect(),
            enemies: state.enemies.iter().map(SpriteView::of).collect(),
            particles: state.particles.iter().map(SpriteView::of).collect(),
            player: (!player.dead).then(|| SpriteView::of(player)),
            hud: Hud::new(state.score, high_score, player.dead),
            debug,
        }
    }
}

/// Consumer of frames (window, terminal, recorder...)
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}
