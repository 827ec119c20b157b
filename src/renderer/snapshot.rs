//! Render-ready view of a session

use serde::Serialize;

use crate::settings::Handedness;
use crate::sim::{Cell, GamePhase, GameSession};

/// Asset shown for a cell
pub fn asset_key(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "background",
        Cell::Invader => "enemy",
        Cell::Breach => "breach",
    }
}

/// Instruction panel text for the current phase
pub fn instruction_text(phase: GamePhase, score: u32, high_score: u32, hand: Handedness) -> String {
    let hand = hand.as_str().to_lowercase();
    match phase {
        GamePhase::NotStarted => format!(
            "Shoot the oncoming aliens\nbefore they reach the bottom!\n\n\
             Move your {hand} hand to navigate.\n\n\
             Close your hand to shoot directly in\nfront.\n\n\
             Now close your hand to start!\n\n\
             Highest score: {high_score}"
        ),
        GamePhase::Playing => format!(
            "Shoot the oncoming aliens\nbefore they reach the bottom!\n\n\
             Move your {hand} hand to navigate.\n\n\
             Close your hand to shoot directly in\nfront.\n\n\
             Score: {score}"
        ),
        GamePhase::GameOverPending | GamePhase::GameOverHeld => format!(
            "GAME OVER!\n\nGreat job!\n\n\
             Your final score is {score}.\n\n\
             Close your hand to start a new game."
        ),
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Asset key per cell, row-major, row 0 at the top
    pub cells: Vec<&'static str>,
    pub instruction: String,
    pub status: Option<String>,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
}

impl RenderSnapshot {
    /// Capture the session. Before the game starts the board is drawn empty.
    pub fn capture(session: &GameSession) -> Self {
        let grid = &session.grid;
        let cells = if session.started() {
            grid.iter_rows().flatten().map(|c| asset_key(*c)).collect()
        } else {
            vec![asset_key(Cell::Empty); grid.rows() * grid.cols()]
        };

        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cells,
            instruction: instruction_text(
                session.phase,
                session.score,
                session.high_score,
                session.config.hand,
            ),
            status: session.status_line.clone(),
            score: session.score,
            high_score: session.high_score,
            phase: session.phase,
        }
    }

    /// Asset key at (row, col), `None` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<&'static str> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }
}
