//! Strictly Crossword library - crossword grids, player games and a grid generator
//!
//! # Architecture
//!
//! - **Puzzle**: clues, words, validated crossword layouts and player games
//! - **Generate**: backtracking fill of raw letter grids
//! - **Lexicon**: dictionary collaborator (in-memory trie or SQLite)
//! - **Config**: TOML application settings
//!
//! # Example
//!
//! ```no_run
//! use strictly_crossword::{Game, Generator, GeneratorConfig, WordList};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let lexicon = WordList::new(["an", "to", "at", "no"]);
//! let generator = Generator::new(lexicon, GeneratorConfig::new(2, 2).with_max_blank_ratio(0.0));
//! let grid = generator.generate().await?;
//!
//! let key = grid.to_crossword(|p| format!("{} letters", p.text.len()))?;
//! let mut game = Game::new(key)?;
//! game.set_char_at(0, 0, "a")?;
//! assert!(!game.is_solved());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod generate;
mod lexicon;
mod puzzle;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Generation
pub use generate::{
    BlankRatioRule, FillRules, FillState, GenerateError, Generator, GeneratorConfig, GridRule,
    NoOrphansRule, RuleViolation, ScanCursor, UniqueRunsRule, check_grid,
};

// Crate-level exports - Lexicon
pub use lexicon::{
    DataError, DictionaryWord, Lexicon, MIGRATIONS, SavedGrid, SqliteLexicon, StoredCrossword,
    WordList, matches_pattern,
};

// Crate-level exports - Puzzle model
pub use puzzle::{
    BLANK, Cell, Clue, Crossword, Direction, Game, LetterGrid, PLACEHOLDER, Placement,
    PuzzleError, PuzzleErrorKind, Run, Shape, UNFILLED, Word, validate_layout,
};
