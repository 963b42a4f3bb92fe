//! Generator error types.

use derive_more::{Display, Error};

use crate::lexicon::DataError;

/// Generation failure.
#[derive(Debug, Clone, Display, Error)]
pub enum GenerateError {
    /// Grid dimensions leave no cell to fill.
    #[display("Invalid grid dimensions {}x{}", rows, cols)]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Backtracking fell off the origin, or the restart allowance ran out.
    #[display("No solution found after {} restarts", restarts)]
    NoSolution {
        /// Time-budget restarts performed before giving up.
        restarts: u32,
    },

    /// The lexicon could not answer.
    #[display("Lexicon failure during generation: {}", _0)]
    Data(DataError),
}

impl From<DataError> for GenerateError {
    fn from(err: DataError) -> Self {
        Self::Data(err)
    }
}
