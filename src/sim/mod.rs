//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven by sensor frames only, no wall clock
//! - Seeded RNG only
//! - No rendering or sensor dependencies

pub mod collision;
pub mod difficulty;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{Kill, ShotResult, hand_cell, is_hand_in_cell, resolve};
pub use difficulty::{BANDS, Band, Difficulty};
pub use grid::{Cell, Grid};
pub use state::{CycleState, GameEvent, GamePhase, GameSession};
pub use tick::{NEW_GAME_STATUS, TickInput, persist_high_score, reset_game, tick};
