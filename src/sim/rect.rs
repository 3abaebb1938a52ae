//! Axis-aligned rectangles for hitboxes and sprite bounds
//!
//! Hitboxes are stored relative to an entity's position and translated into
//! absolute playfield space each tick before collision tests run.

use glam::Vec2;

use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// The whole drawable surface
    pub const fn surface() -> Self {
        Self::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT)
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// Translate a position-relative rect into absolute space
    #[inline]
    pub fn offset_by(&self, pos: Vec2) -> Self {
        Self::new(self.x + pos.x, self.y + pos.y, self.w, self.h)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap: rectangles that merely share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
