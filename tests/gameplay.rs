//! End-to-end gameplay through the public API

use glam::Vec2;
use starcall::consts::*;
use starcall::persistence::{FileStore, HighScoreStore, MemoryStore};
use starcall::sim::{Enemy, Facing, GameEvent, GameState, TickInput, tick};
use starcall::{Game, Tuning};

/// Default tuning with wall spawning switched off
fn quiet_state() -> GameState {
    GameState::with_tuning(
        2024,
        Tuning {
            enemy_spawn_chance: 0.0,
            ..Tuning::default()
        },
    )
}

/// An enemy that only rises with the world
fn riser(state: &GameState, pos: Vec2) -> Enemy {
    let mut enemy = Enemy::new(pos, Facing::Left, 0, &state.tuning);
    enemy.vel.x = 0.0;
    enemy
}

#[test]
fn rising_enemy_kills_player_exactly_once() {
    let mut state = quiet_state();
    state.player.pos = Vec2::new(80.0, 50.0);
    let enemy = riser(&state, Vec2::new(80.0, SURFACE_HEIGHT - TILE_SIZE));
    state.enemies.push(enemy);

    let budget = (SURFACE_HEIGHT - TILE_SIZE - 50.0) as u64;
    let mut deaths = 0;
    let mut died_at = None;
    for t in 1..=budget + 60 {
        tick(&mut state, &TickInput::default());
        for event in state.drain_events() {
            if let GameEvent::PlayerDied { score } = event {
                deaths += 1;
                assert_eq!(score, t);
                assert_eq!(state.particles.len(), 2);
                died_at = Some(t);
            }
        }
    }

    assert!(state.player.dead);
    assert_eq!(deaths, 1);
    let died_at = died_at.expect("player should have died");
    assert!(died_at <= budget);
}

#[test]
fn score_counts_ticks_until_death() {
    let mut state = quiet_state();
    let enemy = riser(&state, Vec2::new(80.0, 120.0));
    state.enemies.push(enemy);

    let mut last = 0;
    let mut frozen_at = None;
    for _ in 0..200 {
        let was_alive = !state.player.dead;
        tick(&mut state, &TickInput::default());
        if was_alive {
            assert_eq!(state.score, last + 1);
        } else {
            frozen_at.get_or_insert(last);
            assert_eq!(state.score, last);
        }
        last = state.score;
    }
    assert!(state.player.dead);
    assert!(frozen_at.is_some());
}

#[test]
fn dive_kill_scores_bonus_and_doubles_fall_speed() {
    let mut state = quiet_state();
    state.player.pos = Vec2::new(80.0, 100.0);
    let enemy = riser(&state, Vec2::new(80.0, 130.0));
    let pre_hit_vspd = enemy.vel.y;
    state.enemies.push(enemy);

    let before = state.score;
    tick(
        &mut state,
        &TickInput {
            down: true,
            ..Default::default()
        },
    );

    let enemy = &state.enemies[0];
    assert!(enemy.dead);
    assert_eq!(enemy.vel.y, pre_hit_vspd * 2.0);
    assert_eq!(state.score - before, state.tuning.score_per_tick + 100);
    assert!(!state.player.dead);
    assert!(state.player.vel.y < 0.0);
    assert!(state.drain_events().contains(&GameEvent::EnemyKilled));
}

#[test]
fn corpse_falls_off_surface_and_is_removed() {
    let mut state = quiet_state();
    state.player.pos = Vec2::new(80.0, 100.0);
    let enemy = riser(&state, Vec2::new(80.0, 130.0));
    state.enemies.push(enemy);

    let dive = TickInput {
        down: true,
        ..Default::default()
    };
    tick(&mut state, &dive);
    assert!(state.enemies[0].dead);

    for _ in 0..400 {
        tick(&mut state, &TickInput::default());
    }
    assert!(state.enemies.is_empty());
}

#[test]
fn world_keeps_running_after_game_over() {
    let mut state = GameState::new(77);
    state.player.dead = true;
    let mut spawned = 0;
    for _ in 0..3000 {
        tick(&mut state, &TickInput::default());
        spawned += state
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::EnemySpawned)
            .count();
    }
    assert_eq!(state.score, 0);
    assert_eq!(state.time_ticks, 3000);
    assert!(spawned > 0);
    assert!(state.walls.iter().all(|w| w.pos.y > -TILE_SIZE && w.pos.y < SURFACE_HEIGHT));
}

#[test]
fn game_records_high_score_on_disk() {
    let dir = std::env::temp_dir().join(format!("starcall-e2e-{}", std::process::id()));
    let path = dir.join("highscores.txt");
    let _ = std::fs::remove_file(&path);

    let mut state = quiet_state();
    let enemy = riser(&state, Vec2::new(80.0, 120.0));
    state.enemies.push(enemy);

    let mut game = Game::new(state, FileStore::new(&path));
    assert_eq!(game.high_score(), 0);
    while !game.state.player.dead {
        game.step(&TickInput::default());
    }
    let score = game.state.score;
    assert!(game.new_record());

    let mut store = FileStore::new(&path);
    assert_eq!(store.load_high_score(), score);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn memory_store_round_trip() {
    let mut store = MemoryStore::default();
    for n in [0, 1, 99, u64::MAX] {
        store.save_high_score(n).unwrap();
        assert_eq!(store.load_high_score(), n);
    }
}
