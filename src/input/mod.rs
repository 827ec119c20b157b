//! Sensor-side input adapters
//!
//! Turns raw sensor frames into one `TickInput` per tick:
//! - `gesture`: open→closed fire latch
//! - `locator`: shoulder-relative hand normalization
//! - `players`: tracking id slots
//! - `frame`: sensor frame types

pub mod frame;
pub mod gesture;
pub mod locator;
pub mod players;

pub use frame::{BodySample, HandState, SensorFrame};
pub use gesture::GestureTracker;
pub use locator::{HandLocator, HandRegion, locate};
pub use players::{Player, PlayerSample, PlayerSlot, PlayerSlots};

use crate::settings::{GameConfig, Handedness};
use crate::sim::TickInput;

/// Routes sensor frames to the player slots
#[derive(Debug, Clone)]
pub struct InputHub {
    handedness: Handedness,
    pub slots: PlayerSlots,
    players: [Player; 2],
}

impl InputHub {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            handedness: config.hand,
            slots: PlayerSlots::new(),
            players: [Player::new(config.latch_policy), Player::new(config.latch_policy)],
        }
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Process one sensor frame. Missing frames or a missing player one
    /// produce an untracked input, which the game treats as a no-op tick.
    pub fn process(&mut self, frame: Option<&SensorFrame>) -> TickInput {
        let Some(frame) = frame else {
            return TickInput::default();
        };
        self.slots.allocate(frame);

        let mut input = TickInput::default();
        for slot in PlayerSlot::ALL {
            let Some(body) = self.slots.tracking_id(slot).and_then(|id| frame.body(id)) else {
                continue;
            };
            let sample = self.players[slot.index()].observe(body, self.handedness);
            if slot == PlayerSlot::One {
                input.tracked = true;
                input.fired = sample.fired;
                input.hand = sample.hand;
            }
        }
        input
    }

    /// Forget open latches (game reset)
    pub fn reset_gestures(&mut self) {
        for player in &mut self.players {
            player.gesture.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body(id: u64, state: HandState) -> BodySample {
        BodySample {
            tracking_id: id,
            shoulder_left: Vec2::new(200.0, 100.0),
            shoulder_right: Vec2::new(300.0, 100.0),
            hand_left: Vec2::new(170.0, 100.0),
            hand_right: Vec2::new(330.0, 100.0),
            hand_left_state: state,
            hand_right_state: HandState::Unknown,
        }
    }

    #[test]
    fn test_missing_frame_is_untracked() {
        let mut hub = InputHub::new(&GameConfig::default());
        assert!(!hub.process(None).tracked);
        assert!(!hub.process(Some(&SensorFrame::default())).tracked);
    }

    #[test]
    fn test_only_player_one_drives_input() {
        let mut hub = InputHub::new(&GameConfig::default());
        let open = SensorFrame {
            bodies: vec![body(1, HandState::Open), body(2, HandState::Open)],
        };
        hub.process(Some(&open));
        hub.process(Some(&open));
        assert_eq!(hub.slots.tracking_id(PlayerSlot::Two), Some(2));

        // Player two closes: no fire reported
        let p2_closed = SensorFrame {
            bodies: vec![body(1, HandState::Open), body(2, HandState::Closed)],
        };
        let input = hub.process(Some(&p2_closed));
        assert!(input.tracked);
        assert!(!input.fired);
        assert!(hub.player(PlayerSlot::Two).gesture.is_closed_edge());

        let p1_closed = SensorFrame {
            bodies: vec![body(1, HandState::Closed)],
        };
        let input = hub.process(Some(&p1_closed));
        assert!(input.fired);
        assert!(input.hand.is_some());
    }

    #[test]
    fn test_reset_gestures() {
        let mut hub = InputHub::new(&GameConfig::default());
        hub.process(Some(&SensorFrame {
            bodies: vec![body(1, HandState::Open)],
        }));
        hub.reset_gestures();
        let input = hub.process(Some(&SensorFrame {
            bodies: vec![body(1, HandState::Closed)],
        }));
        assert!(!input.fired);
    }
}
