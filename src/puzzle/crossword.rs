//! Crossword grid built from a validated set of words.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::clue::Clue;
use super::error::{PuzzleError, PuzzleErrorKind};
use super::layout::validate_layout;
use super::types::Direction;
use super::word::Word;

/// A set of placed words whose overlaps agree.
///
/// The word set and extents never change after construction. Letters change
/// only through [`Crossword::set_char_at`], which writes every word covering
/// the cell, so crossing words cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    words: Vec<Word>,
    rows: usize,
    cols: usize,
}

impl Crossword {
    /// Builds a crossword and validates that overlapping words agree.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleErrorKind::InvalidWordOverlap`] if two words disagree on
    /// a shared cell.
    #[instrument(skip(words), fields(word_count = words.len()))]
    pub fn new(words: Vec<Word>) -> Result<Self, PuzzleError> {
        let shape = validate_layout(&words)?;
        info!(rows = shape.rows, cols = shape.cols, "Crossword built");
        Ok(Self {
            words,
            rows: shape.rows,
            cols: shape.cols,
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

    /// Returns the placed words in construction order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the letter at a cell, or `None` if no word covers it.
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.words
            .iter()
            .find_map(|w| w.index_of(row, col).and_then(|i| w.char_at(i)))
    }

    /// Writes a letter into every word covering the cell.
    ///
    /// Cells inside the grid that no word covers are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleErrorKind::IndexOutOfBounds`] if the cell lies outside
    /// the grid, and propagates character errors from [`Word::set_char_at`].
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn set_char_at(&mut self, row: usize, col: usize, input: &str) -> Result<(), PuzzleError> {
        if row >= self.rows {
            return Err(PuzzleError::new(PuzzleErrorKind::IndexOutOfBounds {
                index: row,
                length: self.rows,
            }));
        }
        if col >= self.cols {
            return Err(PuzzleError::new(PuzzleErrorKind::IndexOutOfBounds {
                index: col,
                length: self.cols,
            }));
        }

        let mut written = 0;
        for word in &mut self.words {
            if let Some(index) = word.index_of(row, col) {
                word.set_char_at(index, input)?;
                written += 1;
            }
        }
        if written == 0 {
            debug!(row, col, "No word covers cell");
        }
        Ok(())
    }

    /// Returns true if at least one word covers the cell.
    pub fn intersects_word(&self, row: usize, col: usize) -> bool {
        self.words.iter().any(|w| w.covers(row, col))
    }

    /// Returns every word's clue in word order. Callers sort if needed.
    pub fn clues(&self) -> Vec<Arc<Clue>> {
        self.words.iter().map(|w| Arc::clone(w.clue())).collect()
    }

    /// Returns the word covering the cell in the given direction.
    pub fn word(&self, row: usize, col: usize, direction: Direction) -> Option<&Word> {
        self.words
            .iter()
            .find(|w| w.direction() == direction && w.covers(row, col))
    }

    /// Builds an independent copy with every letter replaced by a placeholder.
    ///
    /// # Errors
    ///
    /// Propagates layout validation errors (a copied layout cannot newly conflict).
    #[instrument(skip(self))]
    pub fn blank_copy(&self) -> Result<Self, PuzzleError> {
        Self::new(self.words.iter().map(Word::blank_copy).collect())
    }

    /// Builds an independent copy with the same letters.
    ///
    /// # Errors
    ///
    /// Propagates layout validation errors (a copied layout cannot newly conflict).
    #[instrument(skip(self))]
    pub fn full_copy(&self) -> Result<Self, PuzzleError> {
        Self::new(self.words.iter().map(Word::copy).collect())
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.char_at(row, col).unwrap_or('#'))?;
                if col != self.cols - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
