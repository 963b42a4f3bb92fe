//! Raw character grids produced by the generator.

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use super::clue::Clue;
use super::crossword::Crossword;
use super::error::{PuzzleError, PuzzleErrorKind};
use super::types::{Cell, Direction};
use super::word::Word;

/// A committed blank (black) cell.
pub const BLANK: char = '_';

/// A cell the generator has not reached yet.
pub const UNFILLED: char = ' ';

/// A `rows x cols` grid of letters, blanks and unfilled cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

/// A maximal run of letters in one row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// First cell of the run.
    pub start: Cell,
    /// Direction of the run.
    pub direction: Direction,
    /// Letters of the run.
    pub text: String,
    /// True once the run cannot grow: a blank or the grid edge follows it.
    pub complete: bool,
}

/// A word-sized run of a finished grid, ready to become a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Starting row.
    pub row: usize,
    /// Starting column.
    pub col: usize,
    /// Direction of the entry.
    pub direction: Direction,
    /// Letters of the entry.
    pub text: String,
}

impl LetterGrid {
    /// Creates a grid with every cell unfilled.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![UNFILLED; rows * cols],
        }
    }

    /// Parses rows of letters, `_` blanks and spaces for unfilled cells.
    ///
    /// # Errors
    ///
    /// - [`PuzzleErrorKind::EmptyInput`] if there are no rows or the first row is empty
    /// - [`PuzzleErrorKind::IndexOutOfBounds`] if a row's length differs from the first
    /// - [`PuzzleErrorKind::InvalidCharType`] for any other character
    #[instrument(skip(lines), fields(rows = lines.len()))]
    pub fn from_rows(lines: &[&str]) -> Result<Self, PuzzleError> {
        let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        if cols == 0 {
            return Err(PuzzleError::new(PuzzleErrorKind::EmptyInput));
        }

        let mut cells = Vec::with_capacity(lines.len() * cols);
        for line in lines {
            let len = line.chars().count();
            if len != cols {
                return Err(PuzzleError::new(PuzzleErrorKind::IndexOutOfBounds {
                    index: len,
                    length: cols,
                }));
            }
            for c in line.chars() {
                let c = c.to_ascii_lowercase();
                if !(c.is_ascii_lowercase() || c == BLANK || c == UNFILLED) {
                    return Err(PuzzleError::new(PuzzleErrorKind::InvalidCharType(
                        c.to_string(),
                    )));
                }
                cells.push(c);
            }
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a grid with no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the character at a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn get(&self, cell: Cell) -> char {
        self.cells[cell.row * self.cols + cell.col]
    }

    /// Returns the character at a cell, or `None` outside the grid.
    pub fn try_get(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Writes a character into a cell.
    pub fn set(&mut self, cell: Cell, c: char) {
        self.cells[cell.row * self.cols + cell.col] = c;
    }

    /// Marks a cell as unfilled again.
    pub fn clear(&mut self, cell: Cell) {
        self.set(cell, UNFILLED);
    }

    /// Marks every cell as unfilled.
    pub fn reset(&mut self) {
        self.cells.fill(UNFILLED);
    }

    /// Counts cells holding `c`.
    pub fn count(&self, c: char) -> usize {
        self.cells.iter().filter(|x| **x == c).count()
    }

    /// Returns true when no cell is unfilled.
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&UNFILLED)
    }

    /// Iterates over every cell with its character, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (Cell::new(i / self.cols, i % self.cols), *c))
    }

    /// Returns the letters leading up to `cell` in its row, since the last blank.
    pub fn row_prefix(&self, cell: Cell) -> String {
        let mut prefix: Vec<char> = (0..cell.col)
            .rev()
            .map(|col| self.get(Cell::new(cell.row, col)))
            .take_while(|c| *c != BLANK)
            .collect();
        prefix.reverse();
        prefix.into_iter().collect()
    }

    /// Returns the letters leading down to `cell` in its column, since the last blank.
    pub fn col_prefix(&self, cell: Cell) -> String {
        let mut prefix: Vec<char> = (0..cell.row)
            .rev()
            .map(|row| self.get(Cell::new(row, cell.col)))
            .take_while(|c| *c != BLANK)
            .collect();
        prefix.reverse();
        prefix.into_iter().collect()
    }

    fn line(&self, direction: Direction, index: usize) -> Vec<(Cell, char)> {
        match direction {
            Direction::Across => (0..self.cols)
                .map(|col| Cell::new(index, col))
                .map(|cell| (cell, self.get(cell)))
                .collect(),
            Direction::Down => (0..self.rows)
                .map(|row| Cell::new(row, index))
                .map(|cell| (cell, self.get(cell)))
                .collect(),
        }
    }

    /// Lists every maximal letter run, rows first, then columns.
    ///
    /// Runs stop at blanks, unfilled cells and the grid edge. Only a run
    /// stopped by an unfilled cell is left incomplete.
    pub fn runs(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        for (direction, count) in [(Direction::Across, self.rows), (Direction::Down, self.cols)] {
            for index in 0..count {
                let mut current: Option<Run> = None;
                for (cell, c) in self.line(direction, index) {
                    if c.is_ascii_lowercase() {
                        current
                            .get_or_insert_with(|| Run {
                                start: cell,
                                direction,
                                text: String::new(),
                                complete: true,
                            })
                            .text
                            .push(c);
                    } else if let Some(mut run) = current.take() {
                        run.complete = c != UNFILLED;
                        runs.push(run);
                    }
                }
                runs.extend(current);
            }
        }
        runs
    }

    /// Lists every run of two or more letters as a word placement.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn placements(&self) -> Vec<Placement> {
        let placements: Vec<Placement> = self
            .runs()
            .into_iter()
            .filter(|run| run.text.len() > 1)
            .map(|run| Placement {
                row: run.start.row,
                col: run.start.col,
                direction: run.direction,
                text: run.text,
            })
            .collect();
        debug!(count = placements.len(), "Placements extracted");
        placements
    }

    /// Slices the grid into words with caller-supplied clue text and builds a crossword.
    ///
    /// # Errors
    ///
    /// Propagates word construction and layout validation errors.
    #[instrument(skip(self, clue_for), fields(rows = self.rows, cols = self.cols))]
    pub fn to_crossword<F>(&self, mut clue_for: F) -> Result<Crossword, PuzzleError>
    where
        F: FnMut(&Placement) -> String,
    {
        let words = self
            .placements()
            .iter()
            .map(|p| {
                Word::new(
                    None,
                    &p.text,
                    Clue::new(clue_for(p)),
                    p.row,
                    p.col,
                    p.direction,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Crossword::new(words)
    }

    /// Returns the rows as strings.
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.get(Cell::new(row, col)))?;
                if col != self.cols - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
