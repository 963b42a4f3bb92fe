//! Words placed on a crossword grid.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::clue::Clue;
use super::error::{PuzzleError, PuzzleErrorKind};
use super::types::{Cell, Direction, PLACEHOLDER};

/// A run of letters anchored at `(row, col)` in one direction.
///
/// Position, direction and length are fixed at construction. Only single
/// characters may be rewritten. Copies share the same [`Clue`] instance, so
/// blank and full copies of a puzzle present identical clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: Option<i32>,
    text: Vec<char>,
    clue: Arc<Clue>,
    row: usize,
    col: usize,
    direction: Direction,
}

impl Word {
    /// Creates a word and stamps its placement onto the clue.
    ///
    /// `id` is the lexicon key of the word, `None` for words assembled by hand.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleErrorKind::EmptyInput`] if `text` is empty.
    #[track_caller]
    #[instrument(skip(clue), fields(clue = %clue.text()))]
    pub fn new(
        id: Option<i32>,
        text: &str,
        mut clue: Clue,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Self, PuzzleError> {
        if text.is_empty() {
            return Err(PuzzleError::new(PuzzleErrorKind::EmptyInput));
        }
        let order = match direction {
            Direction::Across => row,
            Direction::Down => col,
        };
        clue.place(direction, order);
        Ok(Self {
            id,
            text: text.chars().collect(),
            clue: Arc::new(clue),
            row,
            col,
            direction,
        })
    }

    /// Returns the lexicon id, if the word came from one.
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    /// Returns the current letters.
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Returns the attached clue.
    pub fn clue(&self) -> &Arc<Clue> {
        &self.clue
    }

    /// Returns the starting row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the starting column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells; always equal to the text length.
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Returns the character at `index`, if in range.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.get(index).copied()
    }

    /// Returns the index within this word of the given cell, if covered.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        match self.direction {
            Direction::Across if row == self.row && col >= self.col => {
                Some(col - self.col).filter(|i| *i < self.length())
            }
            Direction::Down if col == self.col && row >= self.row => {
                Some(row - self.row).filter(|i| *i < self.length())
            }
            _ => None,
        }
    }

    /// Returns true if the word covers the given cell.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.index_of(row, col).is_some()
    }

    /// Iterates over the cells the word occupies, paired with their letters.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.text.iter().enumerate().map(move |(i, c)| {
            let cell = match self.direction {
                Direction::Across => Cell::new(self.row, self.col + i),
                Direction::Down => Cell::new(self.row + i, self.col),
            };
            (cell, *c)
        })
    }

    /// Replaces the character at `index` with a lower-cased letter.
    ///
    /// # Errors
    ///
    /// - [`PuzzleErrorKind::IndexOutOfBounds`] if `index >= length`
    /// - [`PuzzleErrorKind::InvalidCharLength`] if `input` is not exactly one character
    /// - [`PuzzleErrorKind::InvalidCharType`] if the character is not a letter `a-z`
    #[instrument(skip(self), fields(word = %self.text(), row = self.row, col = self.col))]
    pub fn set_char_at(&mut self, index: usize, input: &str) -> Result<(), PuzzleError> {
        if index >= self.length() {
            return Err(PuzzleError::new(PuzzleErrorKind::IndexOutOfBounds {
                index,
                length: self.length(),
            }));
        }

        let letter = normalize_letter(input)?;
        debug!(index, letter = %letter, "Setting character");
        self.text[index] = letter;
        Ok(())
    }

    /// Returns an independent copy sharing the same clue.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns a same-shape copy whose letters are all placeholders.
    pub fn blank_copy(&self) -> Self {
        Self {
            text: vec![PLACEHOLDER; self.length()],
            ..self.clone()
        }
    }
}

/// Validates a single-letter input and lower-cases it.
#[track_caller]
fn normalize_letter(input: &str) -> Result<char, PuzzleError> {
    let mut chars = input.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(PuzzleError::new(PuzzleErrorKind::InvalidCharLength(
                input.to_string(),
            )));
        }
    };

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.is_ascii_lowercase() => Ok(l),
        _ => Err(PuzzleError::new(PuzzleErrorKind::InvalidCharType(
            input.to_string(),
        ))),
    }
}
