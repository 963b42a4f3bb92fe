//! Database models for the SQLite lexicon.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use tracing::instrument;

use super::{DataError, DictionaryWord, schema};
use crate::puzzle::LetterGrid;

/// Dictionary word database model.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = schema::words)]
pub(crate) struct WordRow {
    id: i32,
    word: String,
}

impl From<WordRow> for DictionaryWord {
    fn from(row: WordRow) -> Self {
        DictionaryWord::new(row.id, row.word)
    }
}

/// Insertable dictionary word.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::words)]
pub(crate) struct NewWord {
    word: String,
}

/// Insertable charset bank entry.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::charsets)]
pub(crate) struct NewCharset {
    prefix: String,
    remaining_space: i32,
    charset: String,
}

/// Stored crossword database model.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::crosswords)]
pub struct StoredCrossword {
    id: i32,
    name: String,
    rows: i32,
    cols: i32,
    grid: String,
    created_at: NaiveDateTime,
}

impl StoredCrossword {
    /// Parses the stored grid text back into a [`LetterGrid`].
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the stored text is malformed or disagrees with
    /// the stored dimensions.
    #[instrument(skip(self), fields(id = self.id, name = %self.name))]
    pub fn to_grid(&self) -> Result<LetterGrid, DataError> {
        let lines: Vec<&str> = self.grid.lines().collect();
        let grid = LetterGrid::from_rows(&lines)
            .map_err(|e| DataError::new(format!("Invalid grid row for crossword {}: {}", self.id, e)))?;
        if grid.rows() as i32 != self.rows || grid.cols() as i32 != self.cols {
            return Err(DataError::new(format!(
                "Crossword {} is {}x{} but its grid is {}x{}",
                self.id,
                self.rows,
                self.cols,
                grid.rows(),
                grid.cols()
            )));
        }
        Ok(grid)
    }
}

/// Insertable crossword.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::crosswords)]
pub(crate) struct NewCrossword {
    name: String,
    rows: i32,
    cols: i32,
    grid: String,
}

/// Insertable crossword entry.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::crossword_words)]
pub(crate) struct NewCrosswordWord {
    crossword_id: i32,
    word_id: i32,
    start_row: i32,
    start_col: i32,
    direction: String,
}
