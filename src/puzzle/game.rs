//! Player-facing crossword game state.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::clue::Clue;
use super::crossword::Crossword;
use super::error::PuzzleError;
use super::types::{Cell, Direction};
use super::word::Word;

/// A solved key paired with the player's working board.
///
/// The board starts as a blank copy of the key and always shares its layout;
/// only letters differ. The key is never replaced.
#[derive(Debug, Clone)]
pub struct Game {
    key: Crossword,
    board: Crossword,
}

impl Game {
    /// Starts a game from a solved crossword.
    ///
    /// # Errors
    ///
    /// Propagates errors from building the blank board.
    #[instrument(skip(key), fields(rows = key.rows(), cols = key.cols()))]
    pub fn new(key: Crossword) -> Result<Self, PuzzleError> {
        let board = key.blank_copy()?;
        info!(words = key.words().len(), "Game created");
        Ok(Self { key, board })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.key.rows()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.key.cols()
    }

    /// Returns the player's board.
    pub fn board(&self) -> &Crossword {
        &self.board
    }

    /// Writes a player letter onto the board.
    ///
    /// # Errors
    ///
    /// Player input errors from [`Crossword::set_char_at`] propagate unchanged.
    #[instrument(skip(self))]
    pub fn set_char_at(&mut self, row: usize, col: usize, input: &str) -> Result<(), PuzzleError> {
        self.board.set_char_at(row, col, input)
    }

    /// Returns true when every covered cell matches the key.
    #[instrument(skip(self))]
    pub fn is_solved(&self) -> bool {
        let solved = self.incorrect_characters().is_empty();
        if solved {
            info!("Game solved");
        }
        solved
    }

    /// Lists every covered cell whose board letter differs from the key, row-major.
    ///
    /// Unfilled placeholders count as incorrect.
    #[instrument(skip(self))]
    pub fn incorrect_characters(&self) -> Vec<Cell> {
        let mut incorrect = Vec::new();
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.board.intersects_word(row, col)
                    && self.board.char_at(row, col) != self.key.char_at(row, col)
                {
                    incorrect.push(Cell::new(row, col));
                }
            }
        }
        debug!(count = incorrect.len(), "Incorrect cells collected");
        incorrect
    }

    /// Returns the clues of the key.
    pub fn clues(&self) -> Vec<Arc<Clue>> {
        self.key.clues()
    }

    /// Returns the board word covering the cell in the given direction.
    pub fn word(&self, row: usize, col: usize, direction: Direction) -> Option<&Word> {
        self.board.word(row, col, direction)
    }

    /// Returns the board letter at a cell.
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.board.char_at(row, col)
    }

    /// Returns true if a board word covers the cell.
    pub fn intersects_word(&self, row: usize, col: usize) -> bool {
        self.board.intersects_word(row, col)
    }
}
