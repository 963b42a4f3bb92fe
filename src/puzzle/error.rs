//! Puzzle validation errors.

use derive_more::{Display, Error};
use tracing::instrument;

use super::word::Word;

/// What went wrong while building or editing a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PuzzleErrorKind {
    /// A word was constructed with no letters.
    #[display("Word text is empty")]
    EmptyInput,

    /// A cell or character index is outside the valid range.
    #[display("Index {} is out of bounds for length {}", index, length)]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound that was violated.
        length: usize,
    },

    /// A character write was not exactly one character.
    #[display("Expected exactly one character, got {:?}", _0)]
    InvalidCharLength(String),

    /// A character write was not a letter in `a-z` (case-insensitive).
    #[display("Expected a letter a-z, got {:?}", _0)]
    InvalidCharType(String),

    /// Two placed words disagree on the letter of a shared cell.
    #[display("{} word(s) disagree on shared cells: {}", _0.len(), describe_conflicts(_0))]
    InvalidWordOverlap(Vec<Word>),
}

fn describe_conflicts(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| format!("{} ({}, {}) {}", w.text(), w.row(), w.col(), w.direction()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Puzzle error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Puzzle error: {} at {}:{}", kind, file, line)]
pub struct PuzzleError {
    /// What went wrong.
    pub kind: PuzzleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PuzzleError {
    /// Creates a new puzzle error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind), fields(kind = %kind))]
    pub fn new(kind: PuzzleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> &PuzzleErrorKind {
        &self.kind
    }
}
