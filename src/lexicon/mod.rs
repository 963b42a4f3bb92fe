//! Dictionary collaborator consumed by the generator.
//!
//! The [`Lexicon`] trait is the only surface the generator sees. Two backings
//! ship with the crate: an in-memory trie ([`WordList`]) and a SQLite store
//! with a precomputed charset bank ([`SqliteLexicon`]).

mod error;
mod models;
mod pattern;
mod schema;
mod sqlite;
mod trie;
mod word_list;

use std::collections::BTreeSet;

use async_trait::async_trait;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::puzzle::LetterGrid;

pub use error::DataError;
pub use models::StoredCrossword;
pub use pattern::matches_pattern;
pub use sqlite::{MIGRATIONS, SqliteLexicon};
pub use word_list::{SavedGrid, WordList};

/// A dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct DictionaryWord {
    /// Lexicon key.
    id: i32,
    /// Lower-case letters.
    text: String,
}

/// Word source and sink for crossword generation.
///
/// Calls are awaited one at a time by the generator; implementations need not
/// support concurrent mutation.
#[async_trait]
pub trait Lexicon: Send + Sync {
    /// Returns `count` distinct random words, optionally of an exact length.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if fewer than `count` words match.
    async fn random_words(
        &self,
        count: usize,
        length: Option<usize>,
    ) -> Result<Vec<DictionaryWord>, DataError>;

    /// Returns one random word, optionally of an exact length.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if no word matches.
    async fn random_word(&self, length: Option<usize>) -> Result<DictionaryWord, DataError> {
        self.random_words(1, length)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DataError::new("No words found"))
    }

    /// Returns a random word matching a `_` / `%` wildcard pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if no word matches.
    async fn random_word_with_pattern(&self, pattern: &str) -> Result<DictionaryWord, DataError>;

    /// Returns true if a word matches the pattern (`_` one letter, `%` any run),
    /// no longer than `max_length` when given.
    async fn word_exists(&self, pattern: &str, max_length: Option<usize>)
    -> Result<bool, DataError>;

    /// Returns the characters that may follow `prefix` with `remaining_space`
    /// cells left, including the blank `_` when a word may end here.
    async fn charset_for_prefix(
        &self,
        prefix: &str,
        remaining_space: usize,
    ) -> Result<BTreeSet<char>, DataError>;

    /// Stores a finished grid and its across/down words, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if any entry of the grid is not a dictionary word.
    async fn persist_grid(&self, grid: &LetterGrid, name: &str) -> Result<i32, DataError>;
}
