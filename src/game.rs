//! Frame driver
//!
//! Ties the simulation to its collaborators: feeds input snapshots into
//! `tick`, reacts to simulation events (persisting a new high score once per
//! death) and tracks the in-loop toggles.

use crate::highscores::HighScores;
use crate::persistence::HighScoreStore;
use crate::render::Frame;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
#[derive(Debug)]
pub struct Game<S: HighScoreStore> {
    pub state: GameState,
    scores: HighScores<S>,
    debug_overlay: bool,
    running: bool,
    /// Whether this run set a new record
    new_record: bool,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(state: GameState, store: S) -> Self {
        let scores = HighScores::load(store);
        log::info!("Score to beat: {}", scores.best());
        Self {
            state,
            scores,
            debug_overlay: false,
            running: true,
            new_record: false,
        }
    }

    pub fn with_debug_overlay(mut self, on: bool) -> Self {
        self.debug_overlay = on;
        self
    }

    /// Process one frame's input and advance the simulation one step
    pub fn step(&mut self, input: &TickInput) {
        if input.quit_requested {
            log::info!("Quit requested");
            self.running = false;
            return;
        }
        if input.toggle_debug {
            self.debug_overlay = !self.debug_overlay;
            log::debug!("Debug overlay {}", if self.debug_overlay { "on" } else { "off" });
        }

        tick(&mut self.state, input);

        for event in self.state.drain_events() {
            if let GameEvent::PlayerDied { score } = event {
                self.on_player_died(score);
            }
        }
    }

    fn on_player_died(&mut self, score: u64) {
        match self.scores.submit(score) {
            Ok(true) => {
                log::info!("New high score: {}", score);
                self.new_record = true;
            }
            Ok(false) => {}
            Err(e) => log::warn!("Could not save high score: {}", e),
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state, self.scores.to_beat(), self.debug_overlay)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn high_score(&self) -> u64 {
        self.scores.best()
    }

    pub fn new_record(&self) -> bool {
        self.new_record
    }

    pub fn scores(&self) -> &HighScores<S> {
        &self.scores
    }
}
