//! Overlap validation for a set of placed words.

use tracing::{debug, instrument, warn};

use super::error::{PuzzleError, PuzzleErrorKind};
use super::types::Direction;
use super::word::Word;

/// Scratch-grid sentinel for a cell no word has written yet.
const EMPTY_CELL: char = ' ';

/// Extents of a validated word layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Number of rows any word reaches.
    pub rows: usize,
    /// Number of columns any word reaches.
    pub cols: usize,
}

/// Computes the extents of `words` and checks that overlapping words agree.
///
/// Every word's letters are written into a `rows x cols` scratch grid; a word
/// that disagrees with an already written cell is recorded as conflicting.
///
/// # Errors
///
/// - [`PuzzleErrorKind::InvalidWordOverlap`] listing every conflicting word
/// - [`PuzzleErrorKind::IndexOutOfBounds`] if a word escapes the computed extents
#[instrument(skip(words), fields(word_count = words.len()))]
pub fn validate_layout(words: &[Word]) -> Result<Shape, PuzzleError> {
    let shape = extents(words);
    let mut scratch = vec![EMPTY_CELL; shape.rows * shape.cols];
    let mut conflicts = Vec::new();

    for word in words {
        let mut conflicted = false;
        for (cell, letter) in word.cells() {
            if cell.row >= shape.rows || cell.col >= shape.cols {
                return Err(PuzzleError::new(PuzzleErrorKind::IndexOutOfBounds {
                    index: cell.row * shape.cols + cell.col,
                    length: shape.rows * shape.cols,
                }));
            }
            let slot = &mut scratch[cell.row * shape.cols + cell.col];
            if *slot == EMPTY_CELL {
                *slot = letter;
            } else if *slot != letter && !conflicted {
                conflicted = true;
                conflicts.push(word.clone());
            }
        }
    }

    if !conflicts.is_empty() {
        warn!(conflicts = conflicts.len(), "Words disagree on shared cells");
        return Err(PuzzleError::new(PuzzleErrorKind::InvalidWordOverlap(
            conflicts,
        )));
    }

    debug!(rows = shape.rows, cols = shape.cols, "Layout validated");
    Ok(shape)
}

fn extents(words: &[Word]) -> Shape {
    let rows = words
        .iter()
        .map(|w| match w.direction() {
            Direction::Across => w.row() + 1,
            Direction::Down => w.row() + w.length(),
        })
        .max()
        .unwrap_or(0);
    let cols = words
        .iter()
        .map(|w| match w.direction() {
            Direction::Across => w.col() + w.length(),
            Direction::Down => w.col() + 1,
        })
        .max()
        .unwrap_or(0);
    Shape { rows, cols }
}
