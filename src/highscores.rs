//! High score tracking
//!
//! Wraps a `HighScoreStore` and decides when a finished run deserves to be
//! written back.

use crate::persistence::{HighScoreStore, PersistenceError};

/// Best score so far, backed by a store
#[derive(Debug)]
pub struct HighScores<S: HighScoreStore> {
    store: S,
    best: u64,
    /// Record as loaded at startup; the HUD keeps showing it for the session
    to_beat: u64,
}

impl<S: HighScoreStore> HighScores<S> {
    /// Load the current best from the store
    pub fn load(mut store: S) -> Self {
        let best = store.load_high_score();
        Self {
            store,
            best,
            to_beat: best,
        }
    }

    /// Best score known, including one set by this session
    pub fn best(&self) -> u64 {
        self.best
    }

    /// The record this session started against
    pub fn to_beat(&self) -> u64 {
        self.to_beat
    }

    /// Check if a score beats the stored best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Offer a finished run's score; persists it if it beats the best.
    /// Returns whether a new high score was recorded.
    ///
    /// The store is re-read first so a record updated elsewhere is respected.
    pub fn submit(&mut self, score: u64) -> Result<bool, PersistenceError> {
        self.best = self.best.max(self.store.load_high_score());
        if !self.qualifies(score) {
            return Ok(false);
        }
        self.store.save_high_score(score)?;
        self.best = score;
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
