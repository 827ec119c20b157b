//! Error kinds for the game core
//!
//! None of these are fatal to a running game; callers recover locally and
//! the worst outcome is a stale frame.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvadersError {
    #[error("invalid tracking sample: {reason}")]
    InvalidTrackingSample { reason: String },

    #[error("high score store unavailable at {path}: {reason}")]
    ScoreStoreUnavailable { path: String, reason: String },

    #[error("grid access out of range: row {row}, col {col} (grid is {rows}x{cols})")]
    OutOfRangeGridAccess {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InvadersError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            InvadersError::InvalidTrackingSample { .. } => true,
            InvadersError::ScoreStoreUnavailable { .. } => true,
            InvadersError::OutOfRangeGridAccess { .. } => true,
            InvadersError::Config(_) => false,
            InvadersError::Io(_) => false,
            InvadersError::Json(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, InvadersError>;
