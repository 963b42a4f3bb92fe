//! Lexicon error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A lexicon request could not be satisfied: not found, malformed row or connectivity.
#[derive(Debug, Clone, Display, Error)]
#[display("Data error: {} at {}:{}", message, file, line)]
pub struct DataError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DataError {
    /// Creates a new data error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<diesel::result::Error> for DataError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("Diesel error: {}", err))
    }
}

impl From<tokio::task::JoinError> for DataError {
    #[track_caller]
    fn from(err: tokio::task::JoinError) -> Self {
        Self::new(format!("Lexicon task failed: {}", err))
    }
}
