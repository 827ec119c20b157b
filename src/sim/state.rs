//! Game session state
//!
//! Everything the tick scheduler mutates lives in `GameSession`. It is
//! rebuilt on every reset; only the high score survives, via the store.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::grid::Grid;
use crate::settings::GameConfig;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Intro screen, waiting for a fire to start
    NotStarted,
    /// Active gameplay
    Playing,
    /// Lost; the game-over screen counts down
    GameOverPending,
    /// Countdown finished; a fire starts a new game
    GameOverHeld,
}

/// Spawn/move cycle countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleState {
    /// Ticks left before the next move. `Waiting(0)` moves on the next tick.
    Waiting(u32),
    /// The move happened; the next tick reloads the countdown and spawns
    Consumed,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Kill { row: usize, col: usize, score: u32 },
    Spawned { count: u32 },
    Moved,
    GameOver { score: u32 },
    GameOverHeld,
    HighScore { score: u32 },
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub grid: Grid,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub cycle: CycleState,
    /// Ticks left on the game-over screen
    pub game_over_countdown: u32,
    /// Ticks processed (excluding no-data ticks)
    pub time_ticks: u64,
    /// One-line status message (e.g. after a new game request)
    pub status_line: Option<String>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64, high_score: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            grid: Grid::new(config.rows, config.cols),
            phase: GamePhase::NotStarted,
            score: 0,
            high_score,
            difficulty: Difficulty::new(config.initial_cadence, config.initial_max_spawns),
            cycle: CycleState::Consumed,
            game_over_countdown: config.game_over_hold,
            time_ticks: 0,
            status_line: None,
            events: Vec::new(),
            config,
        }
    }

    /// Restore everything but the rng stream to its starting values
    pub fn reset(&mut self, high_score: u32) {
        self.grid.clear();
        self.phase = GamePhase::NotStarted;
        self.score = 0;
        self.high_score = high_score;
        self.difficulty = Difficulty::new(self.config.initial_cadence, self.config.initial_max_spawns);
        self.cycle = CycleState::Consumed;
        self.game_over_countdown = self.config.game_over_hold;
        self.status_line = None;
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOverPending | GamePhase::GameOverHeld)
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }
}
