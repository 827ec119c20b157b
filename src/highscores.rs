//! High score store
//!
//! The high score is a single decimal integer on one line. A missing or
//! corrupt store is never fatal: reads fall back to 0 with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InvadersError, Result};

/// Anything that can hold the high score
pub trait ScoreStore {
    /// Read the stored high score
    fn read(&self) -> Result<u32>;

    /// Overwrite the stored high score
    fn write(&mut self, score: u32) -> Result<()>;

    /// Read the high score, falling back to 0 when the store is unavailable
    fn read_or_default(&self) -> u32 {
        match self.read() {
            Ok(score) => {
                log::info!("High score loaded: {}", score);
                score
            }
            Err(e) => {
                log::warn!("{}; using high score 0", e);
                0
            }
        }
    }

    /// Write `score` only if it beats `current_high`. Returns true when written.
    fn record_if_higher(&mut self, score: u32, current_high: u32) -> bool {
        if score <= current_high {
            return false;
        }
        match self.write(score) {
            Ok(()) => {
                log::info!("New high score saved: {}", score);
                true
            }
            Err(e) => {
                log::warn!("Could not save high score {}: {}", score, e);
                false
            }
        }
    }
}

/// High score kept in a text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl Into<String>) -> InvadersError {
        InvadersError::ScoreStoreUnavailable {
            path: self.path.display().to_string(),
            reason: reason.into(),
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self) -> Result<u32> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e.to_string()))?;
        parse_score(&text).ok_or_else(|| self.unavailable(format!("not a score: {:?}", text.trim())))
    }

    fn write(&mut self, score: u32) -> Result<()> {
        fs::write(&self.path, format!("{}\n", score)).map_err(|e| self.unavailable(e.to_string()))
    }
}

/// In-memory store (tests, demo runs without a file)
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub value: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn with_score(score: u32) -> Self {
        Self { value: Some(score) }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> Result<u32> {
        self.value.ok_or_else(|| InvadersError::ScoreStoreUnavailable {
            path: "<memory>".into(),
            reason: "empty".into(),
        })
    }

    fn write(&mut self, score: u32) -> Result<()> {
        self.value = Some(score);
        Ok(())
    }
}

/// First line of the store as a decimal integer
fn parse_score(text: &str) -> Option<u32> {
    text.lines().next()?.trim().parse().ok()
}
