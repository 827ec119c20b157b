//! Score-driven difficulty
//!
//! Cadence and spawn count follow a fixed table of score bands. Bands are
//! open intervals, so scores that land exactly on a boundary (70, 140, ...)
//! match no band and leave the current values alone.

use serde::{Deserialize, Serialize};

/// One row of the difficulty table. `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Score must be strictly above this
    pub above: Option<u32>,
    /// Score must be strictly below this
    pub below: Option<u32>,
    pub cadence: Option<u32>,
    pub max_spawns: Option<u32>,
}

impl Band {
    const fn new(above: Option<u32>, below: Option<u32>, cadence: Option<u32>, max_spawns: Option<u32>) -> Self {
        Self {
            above,
            below,
            cadence,
            max_spawns,
        }
    }

    pub fn contains(&self, score: u32) -> bool {
        self.above.is_none_or(|lo| score > lo) && self.below.is_none_or(|hi| score < hi)
    }
}

/// Bands in evaluation order; the first match wins
pub const BANDS: [Band; 9] = [
    Band::new(None, Some(70), Some(60), None),
    Band::new(Some(70), Some(140), Some(50), Some(3)),
    Band::new(Some(140), Some(210), Some(50), Some(3)),
    Band::new(Some(210), Some(280), Some(40), None),
    Band::new(Some(280), Some(350), Some(40), None),
    Band::new(Some(350), Some(420), Some(40), Some(4)),
    Band::new(Some(420), Some(490), Some(30), None),
    Band::new(Some(490), Some(1000), Some(30), None),
    Band::new(Some(1000), None, None, Some(5)),
];

/// Current cadence (frames per move cycle) and spawn cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub cadence: u32,
    pub max_spawns: u32,
}

impl Difficulty {
    pub fn new(cadence: u32, max_spawns: u32) -> Self {
        Self { cadence, max_spawns }
    }

    /// Apply the band matching `score`. Returns `(cadence, max_spawns)`.
    pub fn evaluate(&mut self, score: u32) -> (u32, u32) {
        let before = *self;
        if let Some(band) = BANDS.iter().find(|b| b.contains(score)) {
            if let Some(cadence) = band.cadence {
                self.cadence = cadence;
            }
            if let Some(max_spawns) = band.max_spawns {
                self.max_spawns = max_spawns;
            }
        }
        if *self != before {
            log::debug!(
                "Difficulty at score {}: cadence {} -> {}, max spawns {} -> {}",
                score,
                before.cadence,
                self.cadence,
                before.max_spawns,
                self.max_spawns
            );
        }
        (self.cadence, self.max_spawns)
    }
}
