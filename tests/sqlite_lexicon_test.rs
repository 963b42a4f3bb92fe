//! Tests for the SQLite lexicon.

use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::MigrationHarness;
use tempfile::NamedTempFile;

use strictly_crossword::{
    Generator, GeneratorConfig, LetterGrid, Lexicon, MIGRATIONS, SqliteLexicon,
};

const WORDS: [&str; 10] = [
    "ace", "cog", "two", "act", "cow", "ego", "at", "to", "be", "bess",
];

/// Creates a temporary database with the lexicon imported and the charset
/// bank built. The file handle must stay in scope to keep the file alive.
async fn setup_test_db() -> (NamedTempFile, SqliteLexicon) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let lexicon = SqliteLexicon::open(&db_path).expect("Failed to open lexicon");
    lexicon.import_words(WORDS).await.expect("Import failed");
    lexicon.rebuild_charsets(5).await.expect("Charset rebuild failed");
    (db_file, lexicon)
}

#[test]
fn test_open_applies_migrations() {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let _lexicon = SqliteLexicon::open(&db_path).expect("Failed to open lexicon");

    let mut conn = SqliteConnection::establish(&db_path).expect("Failed to connect");
    let pending = conn
        .pending_migrations(MIGRATIONS)
        .expect("Failed to list migrations");
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_import_skips_duplicates_and_junk() {
    let (_db, lexicon) = setup_test_db().await;
    let inserted = lexicon
        .import_words(["ACE", "dog", "d0g", ""])
        .await
        .expect("Import failed");
    assert_eq!(inserted, 1);
    assert_eq!(lexicon.word_count().await.expect("Count failed"), 11);
}

#[tokio::test]
async fn test_random_words_by_length() {
    let (_db, lexicon) = setup_test_db().await;
    let words = lexicon.random_words(3, Some(2)).await.expect("Pick failed");
    assert_eq!(words.len(), 3);
    assert!(words.iter().all(|w| w.text().len() == 2));

    assert!(lexicon.random_words(2, Some(4)).await.is_err());
    assert!(lexicon.random_word(Some(7)).await.is_err());
}

#[tokio::test]
async fn test_patterns() {
    let (_db, lexicon) = setup_test_db().await;
    assert!(lexicon.word_exists("c_w", None).await.expect("Lookup failed"));
    assert!(lexicon.word_exists("b%", Some(2)).await.expect("Lookup failed"));
    assert!(!lexicon.word_exists("bes%", Some(3)).await.expect("Lookup failed"));

    let word = lexicon
        .random_word_with_pattern("_o%")
        .await
        .expect("Pattern should match");
    assert!(["cog", "cow", "to"].contains(&word.text().as_str()));
    assert!(lexicon.random_word_with_pattern("zz%").await.is_err());
}

#[tokio::test]
async fn test_charset_bank_matches_dictionary() {
    let (_db, lexicon) = setup_test_db().await;

    let after_b: String = lexicon
        .charset_for_prefix("b", 4)
        .await
        .expect("Lookup failed")
        .into_iter()
        .collect();
    assert_eq!(after_b, "e");

    let after_be: String = lexicon
        .charset_for_prefix("be", 3)
        .await
        .expect("Lookup failed")
        .into_iter()
        .collect();
    assert_eq!(after_be, "_s");

    let after_be_short: String = lexicon
        .charset_for_prefix("be", 1)
        .await
        .expect("Lookup failed")
        .into_iter()
        .collect();
    assert_eq!(after_be_short, "_");

    assert!(
        lexicon
            .charset_for_prefix("q", 3)
            .await
            .expect("Lookup failed")
            .is_empty()
    );
}

#[tokio::test]
async fn test_persist_and_load_grid() {
    let (_db, lexicon) = setup_test_db().await;
    let grid = LetterGrid::from_rows(&["at", "to"]).expect("Valid grid");

    let id = lexicon.persist_grid(&grid, "tiny").await.expect("Persist failed");
    assert!(id > 0);

    let stored = lexicon.load_grid(id).await.expect("Load failed");
    assert_eq!(stored.name(), "tiny");
    assert_eq!((*stored.rows(), *stored.cols()), (2, 2));
    assert_eq!(stored.to_grid().expect("Parse failed"), grid);

    let entries: Vec<String> = lexicon
        .grid_words(id)
        .await
        .expect("Entries failed")
        .into_iter()
        .map(|w| w.text().clone())
        .collect();
    assert_eq!(entries, vec!["at", "to", "at", "to"]);
}

#[tokio::test]
async fn test_persist_rejects_non_words() {
    let (_db, lexicon) = setup_test_db().await;
    let grid = LetterGrid::from_rows(&["ab", "to"]).expect("Valid grid");
    assert!(lexicon.persist_grid(&grid, "bad").await.is_err());
    assert!(lexicon.load_grid(1).await.is_err());
}

#[tokio::test]
async fn test_generator_runs_on_sqlite() {
    let (_db, lexicon) = setup_test_db().await;
    let config = GeneratorConfig::new(3, 3)
        .with_max_word_length(3)
        .with_seed(11);
    let generator = Generator::new(lexicon, config);

    let grid = generator.generate().await.expect("Generation failed");
    assert!(grid.is_complete());
    assert!(
        grid.to_lines() == ["ace", "cog", "two"] || grid.to_lines() == ["act", "cow", "ego"]
    );
    let id = generator
        .lexicon()
        .persist_grid(&grid, "generated")
        .await
        .expect("Generated grid should only hold words");
    let stored = generator.lexicon().load_grid(id).await.expect("Load failed");
    assert_eq!(stored.to_grid().expect("Parse failed"), grid);
}

#[tokio::test]
async fn test_clones_share_one_connection() {
    let (_db, lexicon) = setup_test_db().await;
    let clone = lexicon.clone();
    assert_eq!(clone.db_path(), lexicon.db_path());

    let (imported, counted) = tokio::join!(clone.import_words(["zoo", "zap"]), async {
        lexicon.word_exists("b%", None).await
    });
    assert_eq!(imported.expect("Import failed"), 2);
    assert!(counted.expect("Lookup failed"));
    assert_eq!(lexicon.word_count().await.expect("Count failed"), 12);
}
