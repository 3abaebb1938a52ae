//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically, one frame at a
//! time: player, walls (spawning), particles, then enemies with collision
//! resolution interleaved per enemy.

use super::collision::{Hit, death_particles, outside_surface, resolve_enemy};
use super::entity::{Facing, Vertical};
use super::particle::Lifespan;
use super::rect::Rect;
use super::state::{GameEvent, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Dive (and arm the attack hitbox)
    pub down: bool,
    /// Leave the game (handled by the driver, not the simulation)
    pub quit_requested: bool,
    /// Flip the hitbox overlay (handled by the driver, not the simulation)
    pub toggle_debug: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if !state.player.dead {
        state.score += state.tuning.score_per_tick;
        update_player(state, input);
    }

    update_walls(state);
    update_particles(state);
    update_enemies(state);
}

fn update_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    if input.left {
        player.accelerate_horizontally(Facing::Left);
    }
    if input.right {
        player.accelerate_horizontally(Facing::Right);
    }
    if input.down {
        player.accelerate_vertically(Vertical::Down);
    } else {
        player.accelerate_vertically(Vertical::Up);
    }
    player.set_diving(input.down);

    if input.left == input.right {
        player.decay_steering();
    }

    player.move_and_collide();
    player.update_hitboxes();
}

fn update_walls(state: &mut GameState) {
    let GameState {
        walls,
        enemies,
        tuning,
        rng,
        events,
        ..
    } = state;
    for wall in walls.iter_mut() {
        let before = enemies.len();
        wall.move_and_spawn(enemies, tuning, rng);
        if enemies.len() > before {
            events.push(GameEvent::EnemySpawned);
        }
    }
}

fn update_particles(state: &mut GameState) {
    let bounds = Rect::surface();
    state.particles.retain_mut(|particle| {
        // Expired particles are dropped before they move or draw again
        if !particle.tick_lifespan() {
            return false;
        }
        if particle.lifespan == Lifespan::Infinite && outside_surface(&bounds, &*particle) {
            return false;
        }
        particle.step();
        particle.update_hitbox();
        true
    });
}

fn update_enemies(state: &mut GameState) {
    let bounds = Rect::surface();
    let GameState {
        enemies,
        player,
        particles,
        tuning,
        rng,
        events,
        score,
        condemned,
        ..
    } = state;
    condemned.clear();

    for (i, enemy) in enemies.iter_mut().enumerate() {
        enemy.move_and_collide(tuning.gravity);

        if enemy.dead {
            enemy.update_hitbox();
            if outside_surface(&bounds, &*enemy) {
                condemned.push(i);
            }
            continue;
        }

        if enemy.scrolled_off_top() {
            condemned.push(i);
            continue;
        }
        enemy.animate();
        enemy.update_hitbox();

        match resolve_enemy(player, enemy, tuning) {
            Hit::EnemyKilled => {
                *score += tuning.kill_bonus;
                events.push(GameEvent::EnemyKilled);
                log::debug!("Enemy killed at ({}, {}), score {}", enemy.pos.x, enemy.pos.y, score);
            }
            Hit::PlayerKilled => {
                particles.extend(death_particles(player.pos, tuning.gravity, rng));
                events.push(GameEvent::PlayerDied { score: *score });
                log::info!("Player died with score {}", score);
            }
            Hit::None => {}
        }
    }

    // Indices were pushed in ascending order; sweep from the back so
    // swap_remove never moves an entry that is still pending removal
    for &i in condemned.iter().rev() {
        enemies.swap_remove(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::enemy::Enemy;
    use crate::sim::entity::Facing;
    use crate::sim::particle::Particle;
    use crate::sim::sprite::DeathSprite;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn quiet_state() -> GameState {
        GameState::with_tuning(
            12345,
            Tuning {
                enemy_spawn_chance: 0.0,
                ..Tuning::default()
            },
        )
    }

    #[test]
    fn test_score_accrues_while_alive() {
        let mut state = quiet_state();
        for n in 1..=10 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.score, n);
        }
        state.player.dead = true;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
        assert_eq!(state.time_ticks, 11);
    }

    #[test]
    fn test_dead_player_ignores_input() {
        let mut state = quiet_state();
        state.player.dead = true;
        let pos = state.player.pos;
        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..20 {
            tick(&mut state, &input);
        }
        assert_eq!(state.player.pos, pos);
        assert!(state.player.attack_rect.is_none());
    }

    #[test]
    fn test_walls_keep_scrolling_after_death() {
        let mut state = quiet_state();
        state.player.dead = true;
        let y = state.walls[4].pos.y;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.walls[4].pos.y, y - 1.0);
    }

    #[test]
    fn test_dive_arms_attack_hitbox() {
        let mut state = quiet_state();
        let dive = TickInput {
            down: true,
            ..Default::default()
        };
        tick(&mut state, &dive);
        assert!(state.player.attack_rect.is_some());
        tick(&mut state, &TickInput::default());
        assert!(state.player.attack_rect.is_none());
    }

    #[test]
    fn test_steering_decays_when_both_held() {
        let mut state = quiet_state();
        state.player.vel.x = 1.0;
        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &both);
        // left (-0.2), right (+0.2), then drag
        assert!((state.player.vel.x - (1.0 - 0.075)).abs() < 1e-5);
    }

    #[test]
    fn test_enemy_leaves_through_top() {
        let mut state = quiet_state();
        let mut enemy = Enemy::new(Vec2::new(80.0, -TILE_SIZE + 0.5), Facing::Left, 0, &state.tuning);
        enemy.vel.x = 0.0;
        state.enemies.push(enemy);
        state.player.dead = true;
        tick(&mut state, &TickInput::default());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_sweep_removes_only_condemned() {
        let mut state = quiet_state();
        state.player.dead = true;
        let tuning = state.tuning.clone();
        for (i, y) in [-TILE_SIZE + 0.5, 120.0, -TILE_SIZE + 0.5, 150.0, -TILE_SIZE + 0.5]
            .into_iter()
            .enumerate()
        {
            let mut enemy = Enemy::new(Vec2::new(40.0 + i as f32 * 10.0, y), Facing::Left, 0, &tuning);
            enemy.vel.x = 0.0;
            state.enemies.push(enemy);
        }
        tick(&mut state, &TickInput::default());

        let mut ys: Vec<f32> = state.enemies.iter().map(|e| e.pos.y).collect();
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(ys, vec![119.0, 149.0]);
    }

    #[test]
    fn test_expired_particle_is_removed_before_moving() {
        let mut state = quiet_state();
        state.particles.push(
            Particle::new(Vec2::new(80.0, 120.0), Vec2::new(1.0, 0.0), DeathSprite::Body.into())
                .with_lifespan(Lifespan::Ticks(1)),
        );
        tick(&mut state, &TickInput::default());
        assert_eq!(state.particles.len(), 1);
        assert_eq!(state.particles[0].pos.x, 81.0);
        tick(&mut state, &TickInput::default());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_infinite_particle_culled_off_surface() {
        let mut state = quiet_state();
        state.particles.push(Particle::new(
            Vec2::new(80.0, SURFACE_HEIGHT + 40.0),
            Vec2::ZERO,
            DeathSprite::Umbrella.into(),
        ));
        tick(&mut state, &TickInput::default());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                down: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..2000 {
            let input = &inputs[(i / 37) % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.player.dead, state2.player.dead);
    }
}
