//! Backtracking crossword grid generation.
//!
//! The [`Generator`] walks the grid in row-major order with a [`ScanCursor`],
//! asks the [`Lexicon`](crate::lexicon::Lexicon) which characters may follow
//! the row and column prefixes at each cell, and checks [`FillRules`] after
//! every placement. Exhausted cells send the cursor back two cells; rejected
//! placements retry the same cell.

mod config;
mod cursor;
mod error;
mod generator;
mod rules;

pub use config::GeneratorConfig;
pub use cursor::ScanCursor;
pub use error::GenerateError;
pub use generator::Generator;
pub use rules::{
    BlankRatioRule, FillRules, FillState, GridRule, NoOrphansRule, RuleViolation, UniqueRunsRule,
    check_grid,
};
