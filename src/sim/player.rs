//! The falling protagonist

use glam::Vec2;

use super::entity::{Body, Facing, Vertical};
use super::rect::Rect;
use super::sprite::{PlayerSprite, Sprite};
use crate::approach;
use crate::consts::*;
use crate::tuning::{PlayerTuning, Tuning};

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// x = hspd, y = vspd (positive is down the screen)
    pub vel: Vec2,
    pub angle: f32,
    pub facing: Facing,
    pub sprite: PlayerSprite,
    pub dead: bool,
    /// Relative body hitbox
    pub hitbox: Rect,
    pub hitbox_rect: Rect,
    /// Relative attack hitbox under the player's feet
    pub attack_hitbox: Rect,
    /// Absolute attack hitbox, present only while diving
    pub attack_rect: Option<Rect>,
    stats: PlayerTuning,
    draft: f32,
    stable_altitude: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        let hitbox = tuning.player.hitbox.rect();
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            facing: Facing::Right,
            sprite: PlayerSprite::Slowfall,
            dead: false,
            hitbox,
            hitbox_rect: hitbox.offset_by(pos),
            attack_hitbox: tuning.player.attack_hitbox.rect(),
            attack_rect: None,
            stats: tuning.player.clone(),
            draft: tuning.upwards_draft_strength,
            stable_altitude: tuning.stable_altitude,
        }
    }

    /// Spawn point at the top-center resting altitude
    pub fn spawn(tuning: &Tuning) -> Self {
        Self::new(
            Vec2::new(SURFACE_WIDTH / 2.0, tuning.stable_altitude),
            tuning,
        )
    }

    pub fn stats(&self) -> &PlayerTuning {
        &self.stats
    }

    pub fn accelerate_horizontally(&mut self, dir: Facing) {
        let s = &self.stats;
        if self.vel.y > 0.0 {
            // Diving halves steering authority and holds the lean
            self.vel.x = approach(self.vel.x, s.max_hspd / 2.0 * dir.sign(), s.spd_buildup_h);
        } else {
            self.vel.x = approach(self.vel.x, s.max_hspd * dir.sign(), s.spd_buildup_h);
            self.angle = approach(self.angle, -s.max_angle * dir.sign(), s.rotation_spd);
        }
        self.facing = dir;
    }

    pub fn accelerate_vertically(&mut self, dir: Vertical) {
        let s = &self.stats;
        match dir {
            Vertical::Down => {
                self.angle = 0.0;
                self.vel.y = approach(self.vel.y, s.max_vspd, s.spd_buildup_v);
            }
            Vertical::Up => {
                self.vel.y = approach(
                    self.vel.y,
                    -(s.max_vspd + self.draft),
                    s.spd_buildup_v * self.draft,
                );
            }
        }
    }

    /// Bleed off steering when no single horizontal direction is held
    pub fn decay_steering(&mut self) {
        if self.vel.x != 0.0 {
            self.vel.x = approach(self.vel.x, 0.0, self.stats.horizontal_resistance);
        }
        if self.angle != 0.0 {
            self.angle = approach(self.angle, 0.0, self.stats.rotation_spd);
        }
    }

    /// Enter or leave the dive pose; the attack hitbox follows the pose
    pub fn set_diving(&mut self, diving: bool) {
        if diving {
            self.sprite = PlayerSprite::Freefall;
            self.attack_rect = Some(self.attack_hitbox.offset_by(self.pos));
        } else {
            self.sprite = PlayerSprite::Slowfall;
            self.attack_rect = None;
        }
    }

    /// Apply velocity, zeroing any component whose predicted edge leaves the play area
    pub fn move_and_collide(&mut self) {
        if self.vel.x != 0.0 {
            let predicted = self.pos.x + self.vel.x + self.hitbox.w / 2.0 * self.facing.sign();
            if predicted > SURFACE_WIDTH - TILE_SIZE || predicted < TILE_SIZE {
                self.vel.x = 0.0;
            }
            self.pos.x += self.vel.x;
        }
        if self.vel.y != 0.0 {
            let predicted = self.pos.y + self.vel.y + self.hitbox.h / 2.0;
            if predicted > SURFACE_HEIGHT - self.hitbox.h || predicted < self.stable_altitude {
                self.vel.y = 0.0;
            }
            self.pos.y += self.vel.y;
        }
    }

    /// Recompute absolute hitboxes from the current position
    pub fn update_hitboxes(&mut self) {
        self.hitbox_rect = self.hitbox.offset_by(self.pos);
        if self.attack_rect.is_some() {
            self.attack_rect = Some(self.attack_hitbox.offset_by(self.pos));
        }
    }
}

impl Body for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn facing(&self) -> Facing {
        self.facing
    }

    fn angle(&self) -> f32 {
        self.angle
    }

    fn sprite(&self) -> Sprite {
        self.sprite.into()
    }

    fn hitbox_rect(&self) -> Rect {
        self.hitbox_rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(Vec2::new(80.0, 120.0), &Tuning::default())
    }

    #[test]
    fn test_steering_leans_against_turn() {
        let mut p = player();
        p.accelerate_horizontally(Facing::Right);
        assert!((p.vel.x - 0.2).abs() < 1e-6);
        assert_eq!(p.angle, -1.5);
        assert_eq!(p.facing, Facing::Right);

        p.accelerate_horizontally(Facing::Left);
        assert!(p.vel.x.abs() < 1e-6);
        assert_eq!(p.angle, 0.0);
        assert_eq!(p.facing, Facing::Left);
    }

    #[test]
    fn test_dive_halves_steering_and_keeps_angle() {
        let mut p = player();
        p.vel.y = 1.0;
        p.angle = 10.0;
        for _ in 0..50 {
            p.accelerate_horizontally(Facing::Right);
        }
        assert_eq!(p.vel.x, 1.0);
        assert_eq!(p.angle, 10.0);
    }

    #[test]
    fn test_updraft_is_stronger_than_dive() {
        let mut p = player();
        p.accelerate_vertically(Vertical::Down);
        assert_eq!(p.vel.y, 0.5);
        p.accelerate_vertically(Vertical::Down);
        p.accelerate_vertically(Vertical::Down);
        assert_eq!(p.vel.y, 1.0);

        p.accelerate_vertically(Vertical::Up);
        assert_eq!(p.vel.y, -0.5);
        for _ in 0..10 {
            p.accelerate_vertically(Vertical::Up);
        }
        assert_eq!(p.vel.y, -4.0);
    }

    #[test]
    fn test_dive_resets_angle() {
        let mut p = player();
        p.angle = 20.0;
        p.accelerate_vertically(Vertical::Down);
        assert_eq!(p.angle, 0.0);
    }

    #[test]
    fn test_wall_zeroes_horizontal_speed() {
        let mut p = player();
        p.pos.x = TILE_SIZE + 5.0;
        p.facing = Facing::Left;
        p.vel.x = -2.0;
        p.move_and_collide();
        assert_eq!(p.vel.x, 0.0);
        assert_eq!(p.pos.x, TILE_SIZE + 5.0);
    }

    #[test]
    fn test_ceiling_zeroes_vertical_speed() {
        let mut p = player();
        p.pos.y = 48.0;
        p.vel.y = -4.0;
        p.move_and_collide();
        assert_eq!(p.vel.y, 0.0);
        assert_eq!(p.pos.y, 48.0);
    }

    #[test]
    fn test_attack_hitbox_only_while_diving() {
        let mut p = player();
        assert!(p.attack_rect.is_none());
        p.set_diving(true);
        assert_eq!(p.attack_rect, Some(Rect::new(79.0, 141.0, 3.0, 3.0)));
        assert_eq!(p.sprite, PlayerSprite::Freefall);

        p.pos.y += 10.0;
        p.update_hitboxes();
        assert_eq!(p.attack_rect, Some(Rect::new(79.0, 151.0, 3.0, 3.0)));

        p.set_diving(false);
        p.update_hitboxes();
        assert!(p.attack_rect.is_none());
    }

    #[test]
    fn test_full_speed_eases_into_dive_cap() {
        let mut p = player();
        for _ in 0..20 {
            p.accelerate_horizontally(Facing::Right);
        }
        assert_eq!(p.vel.x, 2.0);

        p.vel.y = 0.5;
        p.accelerate_horizontally(Facing::Right);
        assert!((p.vel.x - 1.8).abs() < 1e-6);
        for _ in 0..5 {
            p.accelerate_horizontally(Facing::Right);
        }
        assert_eq!(p.vel.x, 1.0);
    }

    proptest! {
        #[test]
        fn horizontal_speed_is_bounded(
            steps in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..300)
        ) {
            let mut p = player();
            let max = p.stats().max_hspd;
            for (left, right, down) in steps {
                if left { p.accelerate_horizontally(Facing::Left); }
                if right { p.accelerate_horizontally(Facing::Right); }
                p.accelerate_vertically(if down { Vertical::Down } else { Vertical::Up });
                if left == right { p.decay_steering(); }
                prop_assert!(p.vel.x.abs() <= max + 1e-5);

                let before = p.pos.x;
                p.move_and_collide();
                if p.vel.x != 0.0 {
                    let edge = before + p.vel.x + p.hitbox.w / 2.0 * p.facing.sign();
                    prop_assert!(edge >= TILE_SIZE && edge <= SURFACE_WIDTH - TILE_SIZE);
                }
            }
        }

        #[test]
        fn dive_steering_converges_to_half_speed(
            start in -2.0f32..=2.0,
            vspd in 0.01f32..=1.0,
            right in any::<bool>(),
        ) {
            let mut p = player();
            p.vel = Vec2::new(start, vspd);
            let dir = if right { Facing::Right } else { Facing::Left };
            let target = p.stats().max_hspd / 2.0 * dir.sign();
            for _ in 0..40 {
                let before = (p.vel.x - target).abs();
                p.accelerate_horizontally(dir);
                prop_assert!((p.vel.x - target).abs() <= before + 1e-6);
            }
            prop_assert_eq!(p.vel.x, target);
        }
    }
}
