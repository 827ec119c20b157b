//! Gesture Invaders - shoot descending invaders by opening and closing a hand
//!
//! Core modules:
//! - `app`: Frame-to-tick wiring (`Game`)
//! - `sim`: Deterministic frame-driven simulation (grid, kills, difficulty, game loop)
//! - `input`: Sensor-side adapters (gesture latch, hand locator, player slots)
//! - `renderer`: Render-ready grid snapshots and a text renderer
//! - `highscores`: Single-integer high score store
//! - `settings`: Startup configuration
//! - `demo`: Scripted player standing in for the sensor

pub mod app;
pub mod demo;
pub mod error;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::Game;
pub use error::{InvadersError, Result};
pub use highscores::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use settings::{GameConfig, Handedness, LatchPolicy};

/// Game configuration constants
pub mod consts {
    /// Side length of the virtual square the hand is mapped into
    pub const REGION_SIZE: f32 = 600.0;

    /// Sensor cadence the core is driven at (frames per second)
    pub const SENSOR_FPS: u32 = 30;

    /// Grid defaults
    pub const DEFAULT_ROWS: usize = 7;
    pub const DEFAULT_COLS: usize = 7;

    /// Frames between move cycles at game start
    pub const INITIAL_CADENCE: u32 = 80;
    /// Upper bound of invaders spawned per cycle at game start
    pub const INITIAL_MAX_SPAWNS: u32 = 3;
    /// Points per invader shot down
    pub const KILL_SCORE: u32 = 10;
    /// Ticks the game-over screen is held before a new game can start
    pub const GAME_OVER_HOLD: u32 = 80;

    /// Hand region anchoring, in multiples of shoulder width
    pub const LEFT_REGION_OFFSET_X: f32 = 1.3;
    pub const RIGHT_REGION_OFFSET_X: f32 = 0.7;
    pub const REGION_OFFSET_Y: f32 = 1.0;
    pub const REGION_SPAN: f32 = 2.0;

    /// Shoulder distances at or below this are treated as "no body"
    pub const MIN_SHOULDER_SCALE: f32 = 1e-4;
}

/// Index of the half-open bucket `[i * size / n, (i + 1) * size / n)` holding `value`.
///
/// Returns `None` when `value` is outside `[0, size)` or not a number.
#[inline]
pub fn bucket_index(value: f32, size: f32, buckets: usize) -> Option<usize> {
    if buckets == 0 || !value.is_finite() || value < 0.0 || value >= size {
        return None;
    }
    let width = size / buckets as f32;
    let idx = (value / width) as usize;
    // Float rounding can push a value just under `size` into bucket `n`
    Some(idx.min(buckets - 1))
}
