//! Scripted stand-in for the skeletal tracker
//!
//! `DemoPilot` fakes one player standing still: it moves the steering hand
//! under the lowest invader and opens and closes it on a fixed rhythm.

use glam::Vec2;

use crate::input::{BodySample, HandRegion, HandState, SensorFrame};
use crate::settings::Handedness;
use crate::sim::{Cell, Grid};

const SHOULDER_LEFT: Vec2 = Vec2::new(200.0, 100.0);
const SHOULDER_RIGHT: Vec2 = Vec2::new(300.0, 100.0);
const BODY_ID: u64 = 1;

/// Ticks the hand stays open, then closed
const HALF_PERIOD: u64 = 3;

#[derive(Debug, Clone)]
pub struct DemoPilot {
    handedness: Handedness,
    ticks: u64,
}

impl DemoPilot {
    pub fn new(handedness: Handedness) -> Self {
        Self { handedness, ticks: 0 }
    }

    /// Column holding the invader closest to the bottom
    pub fn target_column(grid: &Grid) -> Option<usize> {
        (0..grid.rows())
            .rev()
            .find_map(|row| grid.row(row).iter().position(|c| *c == Cell::Invader))
    }

    /// Next synthetic frame aimed at the current grid
    pub fn next_frame(&mut self, grid: &Grid) -> SensorFrame {
        self.ticks += 1;

        let cols = grid.cols().max(1);
        let col = Self::target_column(grid).unwrap_or(cols / 2);
        let unit = Vec2::new((col as f32 + 0.5) / cols as f32, 0.5);

        let hand = match HandRegion::from_shoulders(SHOULDER_LEFT, SHOULDER_RIGHT, self.handedness.is_left()) {
            Ok(region) => region.origin + unit * region.size,
            Err(_) => Vec2::ZERO,
        };
        let state = if (self.ticks / HALF_PERIOD) % 2 == 0 {
            HandState::Open
        } else {
            HandState::Closed
        };

        let (hand_left, hand_right, left_state, right_state) = match self.handedness {
            Handedness::Left => (hand, SHOULDER_RIGHT, state, HandState::Open),
            Handedness::Right => (SHOULDER_LEFT, hand, HandState::Open, state),
        };

        SensorFrame {
            bodies: vec![BodySample {
                tracking_id: BODY_ID,
                shoulder_left: SHOULDER_LEFT,
                shoulder_right: SHOULDER_RIGHT,
                hand_left,
                hand_right,
                hand_left_state: left_state,
                hand_right_state: right_state,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::locate;
    use crate::sim::hand_cell;

    #[test]
    fn test_target_column_prefers_lowest() {
        let mut grid = Grid::new(7, 7);
        assert_eq!(DemoPilot::target_column(&grid), None);
        grid.set(1, 5, Cell::Invader).unwrap();
        grid.set(4, 2, Cell::Invader).unwrap();
        assert_eq!(DemoPilot::target_column(&grid), Some(2));
    }

    #[test]
    fn test_frame_aims_at_target() {
        for handedness in [Handedness::Left, Handedness::Right] {
            let mut grid = Grid::new(7, 7);
            grid.set(2, 6, Cell::Invader).unwrap();
            let mut pilot = DemoPilot::new(handedness);
            let frame = pilot.next_frame(&grid);
            let body = &frame.bodies[0];
            let (hand, _) = body.hand(handedness);
            let pos = locate(body.shoulder_left, body.shoulder_right, hand, handedness.is_left()).unwrap();
            assert_eq!(hand_cell(pos, 7, 7).map(|(_, col)| col), Some(6));
        }
    }

    #[test]
    fn test_hand_rhythm() {
        let grid = Grid::new(7, 7);
        let mut pilot = DemoPilot::new(Handedness::Left);
        let states: Vec<HandState> = (0..8)
            .map(|_| pilot.next_frame(&grid).bodies[0].hand_left_state)
            .collect();
        use HandState::*;
        assert_eq!(states, vec![Open, Open, Closed, Closed, Closed, Open, Open, Open]);
    }
}
