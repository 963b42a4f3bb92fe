//! In-memory lexicon backed by a trie.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use rand::seq::{IteratorRandom, SliceRandom};
use tracing::{debug, info, instrument, warn};

use super::pattern::matches_pattern;
use super::trie::Trie;
use super::{DataError, DictionaryWord, Lexicon};
use crate::puzzle::LetterGrid;

/// A grid stored by [`WordList::persist_grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGrid {
    /// Name given at persistence time.
    pub name: String,
    /// The finished grid.
    pub grid: LetterGrid,
    /// Ids of the across/down entries, in placement order.
    pub word_ids: Vec<i32>,
}

/// Dictionary held in memory; ids follow insertion order starting at 1.
#[derive(Debug, Default)]
pub struct WordList {
    words: Vec<DictionaryWord>,
    ids: HashMap<String, i32>,
    trie: Trie,
    saved: Mutex<Vec<SavedGrid>>,
}

impl WordList {
    /// Builds a word list, lower-casing entries and dropping anything that is
    /// not purely `a-z` or is a duplicate.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        let mut skipped = 0usize;
        for word in words {
            let word = word.as_ref().trim().to_ascii_lowercase();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                skipped += 1;
                continue;
            }
            if list.ids.contains_key(&word) {
                continue;
            }
            let id = list.words.len() as i32 + 1;
            list.trie.insert(&word);
            list.ids.insert(word.clone(), id);
            list.words.push(DictionaryWord::new(id, word));
        }
        if skipped > 0 {
            warn!(skipped, "Dropped entries that are not plain a-z words");
        }
        info!(count = list.words.len(), "Word list built");
        list
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the id of a word, if known.
    pub fn id_of(&self, word: &str) -> Option<i32> {
        self.ids.get(word).copied()
    }

    /// Returns every word, in id order.
    pub fn words(&self) -> &[DictionaryWord] {
        &self.words
    }

    /// Returns the charset for a prefix without going through the async trait.
    pub fn charset(&self, prefix: &str, remaining_space: usize) -> BTreeSet<char> {
        self.trie.charset(prefix, remaining_space)
    }

    /// Returns grids stored so far.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the store lock is poisoned.
    pub fn saved_grids(&self) -> Result<Vec<SavedGrid>, DataError> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .map_err(|e| DataError::new(format!("Grid store poisoned: {}", e)))
    }

    fn pick_random(&self, count: usize, length: Option<usize>) -> Result<Vec<DictionaryWord>, DataError> {
        let candidates: Vec<&DictionaryWord> = self
            .words
            .iter()
            .filter(|w| length.is_none_or(|len| w.text().len() == len))
            .collect();
        if candidates.len() < count {
            return Err(DataError::new(format!(
                "No words found, or not enough for count={}",
                count
            )));
        }
        let mut rng = rand::thread_rng();
        Ok(candidates
            .choose_multiple(&mut rng, count)
            .map(|w| (*w).clone())
            .collect())
    }

    fn pick_with_pattern(&self, pattern: &str) -> Option<DictionaryWord> {
        let mut rng = rand::thread_rng();
        self.words
            .iter()
            .filter(|w| matches_pattern(pattern, w.text()))
            .choose(&mut rng)
            .cloned()
    }
}

#[async_trait]
impl Lexicon for WordList {
    #[instrument(skip(self))]
    async fn random_words(
        &self,
        count: usize,
        length: Option<usize>,
    ) -> Result<Vec<DictionaryWord>, DataError> {
        self.pick_random(count, length)
    }

    #[instrument(skip(self))]
    async fn random_word_with_pattern(&self, pattern: &str) -> Result<DictionaryWord, DataError> {
        self.pick_with_pattern(pattern)
            .ok_or_else(|| DataError::new(format!("No word found matching pattern: {}", pattern)))
    }

    #[instrument(skip(self))]
    async fn word_exists(
        &self,
        pattern: &str,
        max_length: Option<usize>,
    ) -> Result<bool, DataError> {
        Ok(self.trie.matches(pattern, max_length))
    }

    #[instrument(skip(self))]
    async fn charset_for_prefix(
        &self,
        prefix: &str,
        remaining_space: usize,
    ) -> Result<BTreeSet<char>, DataError> {
        Ok(self.trie.charset(prefix, remaining_space))
    }

    #[instrument(skip(self, grid), fields(rows = grid.rows(), cols = grid.cols()))]
    async fn persist_grid(&self, grid: &LetterGrid, name: &str) -> Result<i32, DataError> {
        let mut word_ids = Vec::new();
        for placement in grid.placements() {
            let id = self.id_of(&placement.text).ok_or_else(|| {
                DataError::new(format!(
                    "Grid entry '{}' at ({}, {}) {} is not a dictionary word",
                    placement.text, placement.row, placement.col, placement.direction
                ))
            })?;
            word_ids.push(id);
        }

        let mut saved = self
            .saved
            .lock()
            .map_err(|e| DataError::new(format!("Grid store poisoned: {}", e)))?;
        saved.push(SavedGrid {
            name: name.to_string(),
            grid: grid.clone(),
            word_ids,
        });
        let id = saved.len() as i32;
        debug!(id, "Grid stored in memory");
        Ok(id)
    }
}
