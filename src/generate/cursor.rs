//! Row-major scan position for the backtracking fill.

use crate::puzzle::Cell;

/// Index into row-major cell order.
///
/// The fill loop advances after every step. Retreating one cell before that
/// advance retries the same cell; retreating two revisits the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    rows: usize,
    cols: usize,
    index: isize,
}

impl ScanCursor {
    /// Creates a cursor at the origin.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            index: 0,
        }
    }

    /// Returns the raw scan index; `-1` sits just before the origin.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Returns the current cell, or `None` once the scan has left the grid.
    pub fn cell(&self) -> Option<Cell> {
        let total = (self.rows * self.cols) as isize;
        if self.index < 0 || self.index >= total {
            return None;
        }
        let index = self.index as usize;
        Some(Cell::new(index / self.cols, index % self.cols))
    }

    /// Returns true once every cell has been passed.
    pub fn is_finished(&self) -> bool {
        self.index >= (self.rows * self.cols) as isize
    }

    /// Moves to the next cell.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Steps back one cell; the next advance lands on the same cell again.
    pub fn retreat_one(&mut self) {
        self.index -= 1;
    }

    /// Steps back two cells; the next advance lands on the previous cell.
    ///
    /// Returns `false` without moving when the cursor is at the origin, since
    /// there is no earlier cell left to revisit.
    #[must_use]
    pub fn retreat_two(&mut self) -> bool {
        if self.index < 1 {
            return false;
        }
        self.index -= 2;
        true
    }

    /// Returns to the origin.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
