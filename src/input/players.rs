//! Player slots
//!
//! Two slots are allocated from tracked bodies. Only player one steers and
//! shoots; player two's hand is tracked but has no effect on the game.

use glam::Vec2;

use super::frame::{BodySample, SensorFrame};
use super::gesture::GestureTracker;
use super::locator::HandLocator;
use crate::settings::{Handedness, LatchPolicy};

/// Tracking id value meaning "slot not allocated"
pub const UNALLOCATED: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn index(&self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// Body tracking ids bound to each slot
#[derive(Debug, Clone, Default)]
pub struct PlayerSlots {
    ids: [u64; 2],
}

impl PlayerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a body to a slot, replacing any previous binding
    pub fn assign_tracking_id(&mut self, slot: PlayerSlot, body_id: u64) {
        log::info!("Player {:?} bound to body {}", slot, body_id);
        self.ids[slot.index()] = body_id;
    }

    pub fn tracking_id(&self, slot: PlayerSlot) -> Option<u64> {
        match self.ids[slot.index()] {
            UNALLOCATED => None,
            id => Some(id),
        }
    }

    pub fn slot_of(&self, body_id: u64) -> Option<PlayerSlot> {
        if body_id == UNALLOCATED {
            return None;
        }
        PlayerSlot::ALL
            .into_iter()
            .find(|slot| self.ids[slot.index()] == body_id)
    }

    /// Bind at most one new body per frame: the first unbound body fills the
    /// first empty slot. Bindings are never dropped once made.
    pub fn allocate(&mut self, frame: &SensorFrame) {
        let Some(body) = frame
            .bodies
            .iter()
            .find(|b| b.tracking_id != UNALLOCATED && self.slot_of(b.tracking_id).is_none())
        else {
            return;
        };
        if let Some(slot) = PlayerSlot::ALL
            .into_iter()
            .find(|slot| self.ids[slot.index()] == UNALLOCATED)
        {
            self.assign_tracking_id(slot, body.tracking_id);
        }
    }
}

/// Per-player gesture latch and hand position
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub gesture: GestureTracker,
    pub locator: HandLocator,
}

/// What one player's hand did this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSample {
    pub fired: bool,
    /// Last known position; `None` until a valid sample has been seen
    pub hand: Option<Vec2>,
}

impl Player {
    pub fn new(policy: LatchPolicy) -> Self {
        Self {
            gesture: GestureTracker::new(policy),
            locator: HandLocator::new(),
        }
    }

    /// Feed one body sample through the gesture latch and the locator
    pub fn observe(&mut self, body: &BodySample, handedness: Handedness) -> PlayerSample {
        let (_, state) = body.hand(handedness);
        let fired = self.gesture.update(state);
        // A bad sample keeps the previous position
        let _ = self.locator.update(body, handedness);
        PlayerSample {
            fired,
            hand: self.locator.has_position().then(|| self.locator.position()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::frame::HandState;

    fn body(id: u64) -> BodySample {
        BodySample {
            tracking_id: id,
            shoulder_left: Vec2::new(200.0, 100.0),
            shoulder_right: Vec2::new(300.0, 100.0),
            hand_left: Vec2::new(170.0, 100.0),
            hand_right: Vec2::new(330.0, 100.0),
            hand_left_state: HandState::Open,
            hand_right_state: HandState::Closed,
        }
    }

    fn frame(ids: &[u64]) -> SensorFrame {
        SensorFrame {
            bodies: ids.iter().map(|id| body(*id)).collect(),
        }
    }

    #[test]
    fn test_allocate_one_body_per_frame() {
        let mut slots = PlayerSlots::new();
        let two_bodies = frame(&[11, 22]);

        slots.allocate(&two_bodies);
        assert_eq!(slots.tracking_id(PlayerSlot::One), Some(11));
        assert_eq!(slots.tracking_id(PlayerSlot::Two), None);

        slots.allocate(&two_bodies);
        assert_eq!(slots.tracking_id(PlayerSlot::Two), Some(22));
        assert_eq!(slots.slot_of(22), Some(PlayerSlot::Two));
    }

    #[test]
    fn test_single_body_only_fills_player_one() {
        let mut slots = PlayerSlots::new();
        let one_body = frame(&[11]);
        slots.allocate(&one_body);
        slots.allocate(&one_body);
        assert_eq!(slots.tracking_id(PlayerSlot::One), Some(11));
        assert_eq!(slots.tracking_id(PlayerSlot::Two), None);
    }

    #[test]
    fn test_manual_assignment() {
        let mut slots = PlayerSlots::new();
        slots.assign_tracking_id(PlayerSlot::Two, 5);
        assert_eq!(slots.slot_of(5), Some(PlayerSlot::Two));
        assert_eq!(slots.slot_of(UNALLOCATED), None);

        // Rebinding replaces the old body
        slots.assign_tracking_id(PlayerSlot::Two, 6);
        assert_eq!(slots.slot_of(5), None);
        assert_eq!(slots.tracking_id(PlayerSlot::Two), Some(6));
    }

    #[test]
    fn test_player_observe() {
        let mut player = Player::new(LatchPolicy::Keep);
        let mut sample = body(1);
        let out = player.observe(&sample, Handedness::Left);
        assert!(!out.fired);
        let hand = out.hand.unwrap();
        assert!((hand - Vec2::new(300.0, 300.0)).length() < 1e-3);

        sample.hand_left_state = HandState::Closed;
        assert!(player.observe(&sample, Handedness::Left).fired);
    }
}
