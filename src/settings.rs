//! Game configuration
//!
//! Startup settings for grid size, pacing and input handling. Loaded from a
//! JSON file and/or overridden on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{InvadersError, Result};

/// Which hand steers and shoots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
pub enum Handedness {
    #[default]
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }

    pub fn is_left(&self) -> bool {
        *self == Handedness::Left
    }
}

/// What a Lasso/Unknown/NotTracked hand sample does to the open latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
pub enum LatchPolicy {
    /// Leave the latch as it was
    #[default]
    Keep,
    /// Forget a previous Open; the hand must open again before it can fire
    Clear,
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Grid ===
    pub rows: usize,
    pub cols: usize,

    // === Pacing ===
    /// Frames per move cycle before the difficulty table kicks in
    pub initial_cadence: u32,
    /// Max invaders spawned per cycle before the difficulty table kicks in
    pub initial_max_spawns: u32,
    /// Points per kill
    pub kill_score: u32,
    /// Ticks the game-over screen is held
    pub game_over_hold: u32,

    // === Input ===
    pub hand: Handedness,
    pub latch_policy: LatchPolicy,

    // === Run ===
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// File holding the high score
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,

            initial_cadence: INITIAL_CADENCE,
            initial_max_spawns: INITIAL_MAX_SPAWNS,
            kill_score: KILL_SCORE,
            game_over_hold: GAME_OVER_HOLD,

            hand: Handedness::Left,
            latch_policy: LatchPolicy::Keep,

            seed: None,
            high_score_path: PathBuf::from("highscore.txt"),
        }
    }
}

impl GameConfig {
    /// Check values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(InvadersError::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.initial_max_spawns == 0 {
            return Err(InvadersError::Config(
                "initial_max_spawns must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Seed to run with, drawing a fresh one when none is configured
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    /// Load a config file (JSON)
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to a config file (pretty JSON)
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_game() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (7, 7));
        assert_eq!(config.initial_cadence, 80);
        assert_eq!(config.initial_max_spawns, 3);
        assert_eq!(config.kill_score, 10);
        assert_eq!(config.game_over_hold, 80);
        assert!(config.hand.is_left());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let config = GameConfig {
            cols: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(InvadersError::Config(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "rows": 9, "hand": "Right" }"#).unwrap();
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 7);
        assert_eq!(config.hand, Handedness::Right);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = GameConfig {
            rows: 5,
            seed: Some(42),
            latch_policy: LatchPolicy::Clear,
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(GameConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_cli_value_names() {
        assert_eq!(Handedness::from_str("right", true), Ok(Handedness::Right));
        assert_eq!(LatchPolicy::from_str("clear", true), Ok(LatchPolicy::Clear));
        assert!(Handedness::from_str("both", true).is_err());
    }

    #[test]
    fn test_explicit_seed_wins() {
        let config = GameConfig {
            seed: Some(77),
            ..Default::default()
        };
        assert_eq!(config.effective_seed(), 77);
    }
}
