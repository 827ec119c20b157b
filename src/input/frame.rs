//! Sensor frame types
//!
//! One `SensorFrame` arrives per sensor tick. Joint positions are already in
//! the sensor's 2D display space; depth handling happens upstream.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Handedness;

/// Hand pose reported by the skeletal tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HandState {
    Open,
    Closed,
    Lasso,
    #[default]
    Unknown,
    NotTracked,
}

/// The joints of one tracked body the game cares about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySample {
    pub tracking_id: u64,
    pub shoulder_left: Vec2,
    pub shoulder_right: Vec2,
    pub hand_left: Vec2,
    pub hand_right: Vec2,
    #[serde(default)]
    pub hand_left_state: HandState,
    #[serde(default)]
    pub hand_right_state: HandState,
}

impl BodySample {
    /// Position and pose of the steering hand
    pub fn hand(&self, handedness: Handedness) -> (Vec2, HandState) {
        match handedness {
            Handedness::Left => (self.hand_left, self.hand_left_state),
            Handedness::Right => (self.hand_right, self.hand_right_state),
        }
    }
}

/// Everything the sensor delivered for one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorFrame {
    /// Tracked bodies only; an empty list means nobody is in view
    #[serde(default)]
    pub bodies: Vec<BodySample>,
}

impl SensorFrame {
    pub fn body(&self, tracking_id: u64) -> Option<&BodySample> {
        self.bodies.iter().find(|b| b.tracking_id == tracking_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_from_json() {
        let json = r#"{"bodies":[{"tracking_id":7,
            "shoulder_left":[100.0,200.0],"shoulder_right":[200.0,200.0],
            "hand_left":[50.0,150.0],"hand_right":[250.0,150.0],
            "hand_left_state":"Closed"}]}"#;
        let frame: SensorFrame = serde_json::from_str(json).unwrap();
        let body = frame.body(7).unwrap();
        assert_eq!(body.hand(Handedness::Left), (Vec2::new(50.0, 150.0), HandState::Closed));
        assert_eq!(body.hand(Handedness::Right).1, HandState::Unknown);
        assert!(frame.body(8).is_none());
    }
}
