//! High score record persistence
//!
//! The record is a tiny text file holding the best score in decimal. Reading
//! never fails from the game's point of view: a missing record is recreated as
//! zero and unreadable or malformed content counts as zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while touching the high score record
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("high score record {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed high score record: {0:?}")]
    InvalidRecord(String),
}

/// Parse the record contents; surrounding whitespace is ignored
pub fn parse_record(text: &str) -> Result<u64, PersistenceError> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| PersistenceError::InvalidRecord(trimmed.to_string()))
}

/// Where the best score is kept between runs
pub trait HighScoreStore {
    /// Stored best score, 0 if there is none
    fn load_high_score(&mut self) -> u64;

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError>;
}

/// Plain text file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<u64, PersistenceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_record(&text)
    }
}

impl HighScoreStore for FileStore {
    fn load_high_score(&mut self) -> u64 {
        match self.try_load() {
            Ok(score) => {
                log::info!("Loaded high score {} from {}", score, self.path.display());
                score
            }
            Err(PersistenceError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score record, creating {}", self.path.display());
                if let Err(e) = self.save_high_score(0) {
                    log::warn!("Could not create high score record: {}", e);
                }
                0
            }
            Err(e) => {
                log::warn!("Treating high score as 0: {}", e);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        let io_err = |source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(io_err)?;
            }
        }
        fs::write(&self.path, score.to_string()).map_err(io_err)?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and headless runs without a data directory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub score: Option<u64>,
    /// Number of successful saves
    pub saves: u32,
}

impl MemoryStore {
    pub fn with_score(score: u64) -> Self {
        Self {
            score: Some(score),
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&mut self) -> u64 {
        self.score.unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        self.score = Some(score);
        self.saves += 1;
        Ok(())
    }
}
