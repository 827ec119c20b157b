//! Invader occupancy grid
//!
//! The grid is the single source of truth for the simulation. Renderers
//! only ever read a snapshot of it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{InvadersError, Result};

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Invader,
    /// An invader that reached the last row
    Breach,
}

impl Cell {
    /// Single-digit code used in grid dumps
    pub fn code(&self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Invader => '1',
            Cell::Breach => '2',
        }
    }
}

/// Fixed-size `rows x cols` grid, row 0 at the top
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> InvadersError {
        InvadersError::OutOfRangeGridAccess {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Cell at (row, col), `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrite a cell. Out-of-range writes change nothing.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let i = self.index(row, col).ok_or_else(|| self.out_of_range(row, col))?;
        self.cells[i] = cell;
        Ok(())
    }

    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.set(row, col, Cell::Empty)
    }

    /// Reset every cell to Empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Drop `count` invaders into the top row at uniformly random columns.
    /// Columns are drawn independently, so two invaders can land on the same cell.
    pub fn spawn<R: Rng + ?Sized>(&mut self, count: u32, rng: &mut R) {
        if self.rows == 0 || self.cols == 0 {
            return;
        }
        for _ in 0..count {
            let col = rng.random_range(0..self.cols);
            self.cells[col] = Cell::Invader;
        }
    }

    /// Move every row down by one. The last row is overwritten by the row
    /// above it and the top row is left empty. Invaders landing in the last
    /// row become breaches.
    pub fn shift_down(&mut self) {
        if self.rows == 0 {
            return;
        }
        // Bottom-up so each source row is read before it is overwritten
        for row in (0..self.rows - 1).rev() {
            for col in (0..self.cols).rev() {
                let from = row * self.cols + col;
                let to = from + self.cols;
                self.cells[to] = self.cells[from];
                self.cells[from] = Cell::Empty;
            }
        }

        let last = (self.rows - 1) * self.cols;
        for cell in &mut self.cells[last..] {
            if *cell == Cell::Invader {
                *cell = Cell::Breach;
            }
        }
    }

    /// True when an invader has reached the last row (the game is lost)
    pub fn has_invader_at_bottom(&self) -> bool {
        self.rows > 0 && self.row(self.rows - 1).iter().any(|c| *c == Cell::Breach)
    }

    /// Cells of one row (empty slice when out of range)
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Digit rows (0 empty, 1 invader, 2 breach) for debug logging
    pub fn dump(&self) -> String {
        self.iter_rows()
            .map(|row| row.iter().map(Cell::code).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
