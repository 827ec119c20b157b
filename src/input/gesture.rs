//! Open→closed fire detection
//!
//! The tracker reports a pose every frame, so a held fist would look like a
//! fire on every tick. `GestureTracker` latches an Open sample and turns the
//! next Closed sample into exactly one fire event.

use super::frame::HandState;
use crate::settings::LatchPolicy;

/// Edge-triggered fire detector for one player's hand
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    /// An Open sample has been seen since the last fire
    has_opened: bool,
    /// This tick produced a fire
    closed_edge: bool,
    policy: LatchPolicy,
}

impl GestureTracker {
    pub fn new(policy: LatchPolicy) -> Self {
        Self {
            has_opened: false,
            closed_edge: false,
            policy,
        }
    }

    /// Feed one sample. Returns true on the tick of a genuine open→closed transition.
    pub fn update(&mut self, state: HandState) -> bool {
        self.closed_edge = match state {
            HandState::Open => {
                self.has_opened = true;
                false
            }
            HandState::Closed if self.has_opened => {
                self.has_opened = false;
                true
            }
            HandState::Closed => false,
            HandState::Lasso | HandState::Unknown | HandState::NotTracked => {
                if self.policy == LatchPolicy::Clear {
                    self.has_opened = false;
                }
                false
            }
        };
        self.closed_edge
    }

    pub fn is_closed_edge(&self) -> bool {
        self.closed_edge
    }

    pub fn has_opened(&self) -> bool {
        self.has_opened
    }

    pub fn reset(&mut self) {
        self.has_opened = false;
        self.closed_edge = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use HandState::*;

    fn fires(tracker: &mut GestureTracker, samples: &[HandState]) -> Vec<bool> {
        samples.iter().map(|s| tracker.update(*s)).collect()
    }

    #[test]
    fn test_open_then_closed_fires_once() {
        let mut tracker = GestureTracker::default();
        let out = fires(&mut tracker, &[Open, Open, Closed, Closed, Closed, Open, Closed]);
        assert_eq!(out, vec![false, false, true, false, false, false, true]);
    }

    #[test]
    fn test_closed_without_open_never_fires() {
        let mut tracker = GestureTracker::default();
        assert!(fires(&mut tracker, &[Closed, Closed, Lasso, Closed]).iter().all(|f| !f));
    }

    #[test]
    fn test_keep_policy_survives_lasso() {
        let mut tracker = GestureTracker::new(LatchPolicy::Keep);
        let out = fires(&mut tracker, &[Open, Lasso, Unknown, Closed]);
        assert_eq!(out, vec![false, false, false, true]);
    }

    #[test]
    fn test_clear_policy_drops_latch() {
        let mut tracker = GestureTracker::new(LatchPolicy::Clear);
        let out = fires(&mut tracker, &[Open, NotTracked, Closed]);
        assert_eq!(out, vec![false, false, false]);
    }

    #[test]
    fn test_reset_clears_latch() {
        let mut tracker = GestureTracker::default();
        tracker.update(Open);
        tracker.reset();
        assert!(!tracker.has_opened());
        assert!(!tracker.update(Closed));
        assert!(!tracker.is_closed_edge());
    }

    fn open_closed() -> impl Strategy<Value = HandState> {
        prop_oneof![Just(Open), Just(Closed)]
    }

    fn any_state() -> impl Strategy<Value = HandState> {
        prop_oneof![Just(Open), Just(Closed), Just(Lasso), Just(Unknown), Just(NotTracked)]
    }

    /// Closed runs whose previous sample was Open
    fn expected_fires(samples: &[HandState]) -> usize {
        samples
            .windows(2)
            .filter(|w| w[0] == Open && w[1] == Closed)
            .count()
    }

    proptest! {
        #[test]
        fn prop_fires_match_closed_runs_after_open(samples in prop::collection::vec(open_closed(), 0..200)) {
            let mut tracker = GestureTracker::default();
            let count = fires(&mut tracker, &samples).iter().filter(|f| **f).count();
            prop_assert_eq!(count, expected_fires(&samples));
        }

        #[test]
        fn prop_clear_policy_fires_match(samples in prop::collection::vec(any_state(), 0..200)) {
            let mut tracker = GestureTracker::new(LatchPolicy::Clear);
            let count = fires(&mut tracker, &samples).iter().filter(|f| **f).count();
            prop_assert_eq!(count, expected_fires(&samples));
        }

        #[test]
        fn prop_never_fires_twice_in_a_row(samples in prop::collection::vec(any_state(), 0..200)) {
            let mut tracker = GestureTracker::default();
            let out = fires(&mut tracker, &samples);
            prop_assert!(out.windows(2).all(|w| !(w[0] && w[1])));
        }
    }
}
