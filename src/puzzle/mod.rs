//! Crossword puzzle model: clues, words, validated grids and game state.

mod clue;
mod crossword;
mod error;
mod game;
mod layout;
mod letter_grid;
mod types;
mod word;

pub use clue::Clue;
pub use crossword::Crossword;
pub use error::{PuzzleError, PuzzleErrorKind};
pub use game::Game;
pub use layout::{Shape, validate_layout};
pub use letter_grid::{BLANK, LetterGrid, Placement, Run, UNFILLED};
pub use types::{Cell, Direction, PLACEHOLDER};
pub use word::Word;
