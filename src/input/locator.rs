//! Hand position normalization
//!
//! Maps the steering hand from sensor display space into a 600x600 square
//! scaled to the player's shoulder width. The square sits beside the body,
//! shifted further out for the left hand than the right because the camera
//! view is mirrored.

use glam::Vec2;

use super::frame::BodySample;
use crate::consts::*;
use crate::error::{InvadersError, Result};
use crate::settings::Handedness;

/// Origin and side length of the calibrated hand region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandRegion {
    pub origin: Vec2,
    pub size: f32,
}

impl HandRegion {
    /// Region for the given shoulders and hand side
    pub fn from_shoulders(shoulder_left: Vec2, shoulder_right: Vec2, use_left: bool) -> Result<Self> {
        let scale = shoulder_left.distance(shoulder_right);
        if !scale.is_finite() || scale <= MIN_SHOULDER_SCALE {
            return Err(InvadersError::InvalidTrackingSample {
                reason: format!("shoulder distance {} too small", scale),
            });
        }

        let origin = if use_left {
            shoulder_left - Vec2::new(LEFT_REGION_OFFSET_X * scale, REGION_OFFSET_Y * scale)
        } else {
            shoulder_right - Vec2::new(RIGHT_REGION_OFFSET_X * scale, REGION_OFFSET_Y * scale)
        };

        Ok(Self {
            origin,
            size: REGION_SPAN * scale,
        })
    }

    /// Hand position inside the region, in 0..REGION_SIZE units (unclamped)
    pub fn normalize(&self, hand: Vec2) -> Vec2 {
        (hand - self.origin) / self.size * REGION_SIZE
    }
}

/// Normalize a hand joint against the shoulders.
///
/// Values outside `[0, 600]` mean the hand left the region and are returned as is.
pub fn locate(shoulder_left: Vec2, shoulder_right: Vec2, hand: Vec2, use_left: bool) -> Result<Vec2> {
    if !hand.is_finite() {
        return Err(InvadersError::InvalidTrackingSample {
            reason: "hand joint is not finite".into(),
        });
    }
    let region = HandRegion::from_shoulders(shoulder_left, shoulder_right, use_left)?;
    Ok(region.normalize(hand))
}

/// Last known normalized hand position for one player
#[derive(Debug, Clone, Default)]
pub struct HandLocator {
    position: Vec2,
    located: bool,
}

impl HandLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a body sample. On a bad sample the previous position is kept.
    pub fn update(&mut self, body: &BodySample, handedness: Handedness) -> Result<Vec2> {
        let (hand, _) = body.hand(handedness);
        match locate(body.shoulder_left, body.shoulder_right, hand, handedness.is_left()) {
            Ok(pos) => {
                self.position = pos;
                self.located = true;
                Ok(pos)
            }
            Err(e) => {
                log::debug!("Keeping last hand position {:?}: {}", self.position, e);
                Err(e)
            }
        }
    }

    /// Position in region units
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position as a fraction of the region (0..1, may fall outside)
    pub fn position_unit(&self) -> Vec2 {
        self.position / REGION_SIZE
    }

    /// Whether any valid sample has been seen
    pub fn has_position(&self) -> bool {
        self.located
    }
}
