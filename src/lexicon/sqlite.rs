//! SQLite lexicon with a precomputed charset bank.

use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use super::models::{NewCharset, NewCrossword, NewCrosswordWord, NewWord, StoredCrossword, WordRow};
use super::trie::Trie;
use super::{DataError, DictionaryWord, Lexicon, schema};
use crate::puzzle::LetterGrid;

/// Schema migrations embedded in the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite allows at most 999 bound variables per statement on older builds.
const INSERT_CHUNK: usize = 250;

diesel::define_sql_function! {
    /// SQL `LENGTH` on text.
    #[sql_name = "LENGTH"]
    fn text_length(x: Text) -> Integer;
}

/// Lexicon stored in a SQLite database.
///
/// One connection is opened up front and shared by every clone. Diesel calls
/// run on the blocking pool so the async contract never stalls the runtime.
#[derive(Clone)]
pub struct SqliteLexicon {
    db_path: String,
    conn: Arc<Mutex<SqliteConnection>>,
}

impl std::fmt::Debug for SqliteLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteLexicon")
            .field("db_path", &self.db_path)
            .finish()
    }
}

impl SqliteLexicon {
    /// Opens the database at `db_path` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, DataError> {
        let db_path = db_path.as_ref().to_string();
        info!(path = %db_path, "Opening SQLite lexicon");
        let mut conn = SqliteConnection::establish(&db_path)
            .map_err(|e| DataError::new(format!("Failed to connect to '{}': {}", db_path, e)))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DataError::new(format!("Migration failed: {}", e)))?;
        debug!(applied = applied.len(), "Migrations applied");
        Ok(Self {
            db_path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Returns the database path.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Runs `f` against the shared connection on the blocking pool.
    async fn run<T, F>(&self, f: F) -> Result<T, DataError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, DataError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|e| DataError::new(format!("Connection lock poisoned: {}", e)))?;
            f(&mut *guard)
        })
        .await?
    }

    /// Inserts words, lower-cased, skipping non `a-z` entries and duplicates.
    /// Returns how many were new.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if a database error occurs.
    #[instrument(skip(self, words))]
    pub async fn import_words<I, S>(&self, words: I) -> Result<usize, DataError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let rows: Vec<NewWord> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .filter(|w| seen.insert(w.clone()))
            .map(NewWord::new)
            .collect();
        debug!(candidates = rows.len(), "Importing words");

        let inserted = self
            .run(move |conn| {
                conn.transaction::<_, DataError, _>(|conn| {
                    let mut inserted = 0;
                    for chunk in rows.chunks(INSERT_CHUNK) {
                        inserted += diesel::insert_or_ignore_into(schema::words::table)
                            .values(chunk)
                            .execute(conn)?;
                    }
                    Ok(inserted)
                })
            })
            .await?;

        info!(inserted, "Words imported");
        Ok(inserted)
    }

    /// Returns the number of dictionary words.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if a database error occurs.
    #[instrument(skip(self))]
    pub async fn word_count(&self) -> Result<i64, DataError> {
        self.run(|conn| Ok(schema::words::table.count().get_result::<i64>(conn)?))
            .await
    }

    /// Regenerates the charset bank for words up to `max_word_length` letters.
    ///
    /// For the empty prefix and every word prefix shorter than
    /// `max_word_length`, and every remaining space from 0 up to
    /// `max_word_length - prefix length`, the non-empty charset is stored.
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if a database error occurs.
    #[instrument(skip(self))]
    pub async fn rebuild_charsets(&self, max_word_length: usize) -> Result<usize, DataError> {
        let written = self
            .run(move |conn| {
                let texts: Vec<String> = schema::words::table
                    .select(schema::words::word)
                    .load(conn)?;
                let trie = Trie::build(texts.iter().map(String::as_str));

                let prefixes: BTreeSet<&str> = texts
                    .iter()
                    .flat_map(|w| {
                        (0..=w.len())
                            .filter(move |k| *k < max_word_length)
                            .map(move |k| &w[..k])
                    })
                    .chain(std::iter::once(""))
                    .collect();

                let rows: Vec<NewCharset> = prefixes
                    .iter()
                    .flat_map(|prefix| {
                        let trie = &trie;
                        (0..=max_word_length - prefix.len()).filter_map(move |space| {
                            let charset = trie.charset(prefix, space);
                            (!charset.is_empty()).then(|| {
                                NewCharset::new(
                                    prefix.to_string(),
                                    space as i32,
                                    charset.into_iter().collect(),
                                )
                            })
                        })
                    })
                    .collect();

                conn.transaction::<_, DataError, _>(|conn| {
                    diesel::delete(schema::charsets::table).execute(conn)?;
                    let mut written = 0;
                    for chunk in rows.chunks(INSERT_CHUNK) {
                        written += diesel::insert_into(schema::charsets::table)
                            .values(chunk)
                            .execute(conn)?;
                    }
                    Ok(written)
                })
            })
            .await?;

        info!(written, max_word_length, "Charset bank rebuilt");
        Ok(written)
    }

    /// Loads a stored crossword by id.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the crossword does not exist or a database error occurs.
    #[instrument(skip(self))]
    pub async fn load_grid(&self, id: i32) -> Result<StoredCrossword, DataError> {
        self.run(move |conn| {
            schema::crosswords::table
                .find(id)
                .select(StoredCrossword::as_select())
                .first::<StoredCrossword>(conn)
                .optional()?
                .ok_or_else(|| DataError::new(format!("No crossword with id {}", id)))
        })
        .await
    }

    /// Lists the words stored for a crossword, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if a database error occurs.
    #[instrument(skip(self))]
    pub async fn grid_words(&self, crossword_id: i32) -> Result<Vec<DictionaryWord>, DataError> {
        self.run(move |conn| {
            let rows: Vec<WordRow> = schema::crossword_words::table
                .inner_join(schema::words::table)
                .filter(schema::crossword_words::crossword_id.eq(crossword_id))
                .order(schema::crossword_words::id.asc())
                .select(WordRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(DictionaryWord::from).collect())
        })
        .await
    }
}

#[async_trait]
impl Lexicon for SqliteLexicon {
    #[instrument(skip(self))]
    async fn random_words(
        &self,
        count: usize,
        length: Option<usize>,
    ) -> Result<Vec<DictionaryWord>, DataError> {
        let rows = self
            .run(move |conn| {
                let mut query = schema::words::table
                    .select(WordRow::as_select())
                    .into_boxed();
                if let Some(len) = length {
                    query = query.filter(text_length(schema::words::word).eq(len as i32));
                }
                Ok(query
                    .order(diesel::dsl::sql::<Integer>("RANDOM()"))
                    .limit(count as i64)
                    .load::<WordRow>(conn)?)
            })
            .await?;

        if rows.len() != count {
            warn!(found = rows.len(), count, "Not enough words");
            return Err(DataError::new(format!(
                "No words found, or not enough for count={}",
                count
            )));
        }
        Ok(rows.into_iter().map(DictionaryWord::from).collect())
    }

    #[instrument(skip(self))]
    async fn random_word_with_pattern(&self, pattern: &str) -> Result<DictionaryWord, DataError> {
        let sql_pattern = pattern.to_ascii_lowercase();
        let row = self
            .run(move |conn| {
                Ok(schema::words::table
                    .filter(schema::words::word.like(sql_pattern))
                    .order(diesel::dsl::sql::<Integer>("RANDOM()"))
                    .select(WordRow::as_select())
                    .first::<WordRow>(conn)
                    .optional()?)
            })
            .await?;

        row.map(DictionaryWord::from)
            .ok_or_else(|| DataError::new(format!("No word found matching pattern: {}", pattern)))
    }

    #[instrument(skip(self))]
    async fn word_exists(
        &self,
        pattern: &str,
        max_length: Option<usize>,
    ) -> Result<bool, DataError> {
        let sql_pattern = pattern.to_ascii_lowercase();
        self.run(move |conn| {
            let mut query = schema::words::table
                .filter(schema::words::word.like(sql_pattern))
                .select(schema::words::id)
                .into_boxed();
            if let Some(max) = max_length {
                query = query.filter(text_length(schema::words::word).le(max as i32));
            }
            Ok(query.first::<i32>(conn).optional()?.is_some())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn charset_for_prefix(
        &self,
        prefix: &str,
        remaining_space: usize,
    ) -> Result<BTreeSet<char>, DataError> {
        let prefix = prefix.to_string();
        let charset = self
            .run(move |conn| {
                Ok(schema::charsets::table
                    .filter(schema::charsets::prefix.eq(prefix))
                    .filter(schema::charsets::remaining_space.eq(remaining_space as i32))
                    .select(schema::charsets::charset)
                    .first::<String>(conn)
                    .optional()?)
            })
            .await?;
        Ok(charset.unwrap_or_default().chars().collect())
    }

    #[instrument(skip(self, grid), fields(rows = grid.rows(), cols = grid.cols()))]
    async fn persist_grid(&self, grid: &LetterGrid, name: &str) -> Result<i32, DataError> {
        if !grid.is_complete() {
            return Err(DataError::new("Refusing to store a grid with unfilled cells"));
        }
        let placements = grid.placements();
        let new_crossword = NewCrossword::new(
            name.to_string(),
            grid.rows() as i32,
            grid.cols() as i32,
            grid.to_lines().join("\n"),
        );

        let id = self
            .run(move |conn| {
                conn.transaction::<_, DataError, _>(|conn| {
                    let mut entries = Vec::with_capacity(placements.len());
                    for placement in &placements {
                        let word_id = schema::words::table
                            .filter(schema::words::word.eq(&placement.text))
                            .select(schema::words::id)
                            .first::<i32>(conn)
                            .optional()?
                            .ok_or_else(|| {
                                DataError::new(format!(
                                    "Grid entry '{}' at ({}, {}) {} is not a dictionary word",
                                    placement.text,
                                    placement.row,
                                    placement.col,
                                    placement.direction
                                ))
                            })?;
                        entries.push((word_id, placement));
                    }

                    let crossword_id = diesel::insert_into(schema::crosswords::table)
                        .values(&new_crossword)
                        .returning(schema::crosswords::id)
                        .get_result::<i32>(conn)?;

                    let rows: Vec<NewCrosswordWord> = entries
                        .into_iter()
                        .map(|(word_id, p)| {
                            NewCrosswordWord::new(
                                crossword_id,
                                word_id,
                                p.row as i32,
                                p.col as i32,
                                p.direction.to_string(),
                            )
                        })
                        .collect();
                    for chunk in rows.chunks(INSERT_CHUNK) {
                        diesel::insert_into(schema::crossword_words::table)
                            .values(chunk)
                            .execute(conn)?;
                    }
                    Ok(crossword_id)
                })
            })
            .await?;

        info!(id, name, "Grid persisted");
        Ok(id)
    }
}
