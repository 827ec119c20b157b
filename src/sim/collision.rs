//! Shot resolution
//!
//! A fire event shoots straight up the column under the hand. The lowest
//! invader in that column is destroyed; at most one kill per shot.

use glam::Vec2;

use super::grid::{Cell, Grid};
use crate::bucket_index;
use crate::consts::REGION_SIZE;

/// A destroyed invader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kill {
    pub row: usize,
    pub col: usize,
}

/// Grid cell containing a normalized hand position, using half-open buckets
/// of the 600x600 region. `None` when the hand is outside the region.
pub fn hand_cell(hand: Vec2, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let col = bucket_index(hand.x, REGION_SIZE, cols)?;
    let row = bucket_index(hand.y, REGION_SIZE, rows)?;
    Some((row, col))
}

/// Whether the hand is inside the given cell. Out-of-range cells never match.
pub fn is_hand_in_cell(hand: Vec2, row: usize, col: usize, rows: usize, cols: usize) -> bool {
    hand_cell(hand, rows, cols) == Some((row, col))
}

/// Clear the lowest invader in `col`. Breaches are not shootable.
pub fn shoot_column(grid: &mut Grid, col: usize) -> Option<Kill> {
    let row = (0..grid.rows())
        .rev()
        .find(|row| grid.get(*row, col) == Some(Cell::Invader))?;
    grid.clear_cell(row, col).ok()?;
    Some(Kill { row, col })
}

/// Outcome of one tick's shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotResult {
    pub kill: Option<Kill>,
    /// Points earned this tick
    pub score_delta: u32,
}

impl ShotResult {
    pub fn miss() -> Self {
        Self {
            kill: None,
            score_delta: 0,
        }
    }
}

/// Resolve one tick's shot: at most one kill, worth `kill_score`
pub fn resolve(hand: Vec2, fired: bool, grid: &mut Grid, kill_score: u32) -> ShotResult {
    if !fired {
        return ShotResult::miss();
    }
    let Some((_, col)) = hand_cell(hand, grid.rows(), grid.cols()) else {
        return ShotResult::miss();
    };
    match shoot_column(grid, col) {
        Some(kill) => {
            log::debug!("Invader down at ({}, {})", kill.row, kill.col);
            ShotResult {
                kill: Some(kill),
                score_delta: kill_score,
            }
        }
        None => ShotResult::miss(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Center of a cell in a 7x7 grid
    fn cell_center(row: usize, col: usize) -> Vec2 {
        let w = REGION_SIZE / 7.0;
        Vec2::new((col as f32 + 0.5) * w, (row as f32 + 0.5) * w)
    }

    #[test]
    fn test_hand_cell_half_open() {
        let w = REGION_SIZE / 7.0;
        assert_eq!(hand_cell(Vec2::new(0.0, 0.0), 7, 7), Some((0, 0)));
        assert_eq!(hand_cell(Vec2::new(w, 0.0), 7, 7), Some((0, 1)));
        assert_eq!(hand_cell(Vec2::new(599.9, 599.9), 7, 7), Some((6, 6)));
        assert_eq!(hand_cell(Vec2::new(600.0, 10.0), 7, 7), None);
        assert_eq!(hand_cell(Vec2::new(-0.1, 10.0), 7, 7), None);
        assert_eq!(hand_cell(Vec2::new(f32::NAN, 10.0), 7, 7), None);
    }

    #[test]
    fn test_is_hand_in_cell() {
        let hand = cell_center(2, 5);
        assert!(is_hand_in_cell(hand, 2, 5, 7, 7));
        assert!(!is_hand_in_cell(hand, 2, 4, 7, 7));
        assert!(!is_hand_in_cell(hand, 9, 5, 7, 7));
    }

    #[test]
    fn test_kills_lowest_invader_once() {
        let mut grid = Grid::new(7, 7);
        grid.set(1, 3, Cell::Invader).unwrap();
        grid.set(4, 3, Cell::Invader).unwrap();

        // Hand row does not matter, only the column
        let hand = cell_center(0, 3);
        let shot = resolve(hand, true, &mut grid, 10);
        assert_eq!(shot.score_delta, 10);
        assert_eq!(shot.kill, Some(Kill { row: 4, col: 3 }));
        assert_eq!(grid.get(4, 3), Some(Cell::Empty));
        assert_eq!(grid.get(1, 3), Some(Cell::Invader));

        assert_eq!(resolve(hand, true, &mut grid, 10).score_delta, 10);
        assert_eq!(grid.count(Cell::Invader), 0);

        assert_eq!(resolve(hand, true, &mut grid, 10), ShotResult::miss());
    }

    #[test]
    fn test_no_fire_no_kill() {
        let mut grid = Grid::new(7, 7);
        grid.set(6, 0, Cell::Invader).unwrap();
        assert_eq!(resolve(cell_center(6, 0), false, &mut grid, 10).score_delta, 0);
        assert_eq!(grid.get(6, 0), Some(Cell::Invader));
    }

    #[test]
    fn test_breach_is_not_shootable() {
        let mut grid = Grid::new(7, 7);
        grid.set(6, 2, Cell::Breach).unwrap();
        assert_eq!(resolve(cell_center(3, 2), true, &mut grid, 10).kill, None);
        assert_eq!(grid.get(6, 2), Some(Cell::Breach));
    }

    #[test]
    fn test_hand_outside_region_misses() {
        let mut grid = Grid::new(7, 7);
        grid.set(0, 0, Cell::Invader).unwrap();
        assert_eq!(resolve(Vec2::new(-20.0, 50.0), true, &mut grid, 10).score_delta, 0);
        assert_eq!(grid.count(Cell::Invader), 1);
    }
}
