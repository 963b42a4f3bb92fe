//! Tests for the in-memory word list lexicon.

use strictly_crossword::{LetterGrid, Lexicon, WordList};

fn words() -> WordList {
    WordList::new(["Bass", "bats", "bess", "be", "at", "to", "a", "x-ray", "be"])
}

#[test]
fn test_new_normalizes_and_deduplicates() {
    let list = words();
    assert_eq!(list.len(), 7);
    assert_eq!(list.id_of("bass"), Some(1));
    assert_eq!(list.id_of("be"), Some(4));
    assert_eq!(list.id_of("x-ray"), None);
    assert!(!list.is_empty());
}

#[tokio::test]
async fn test_random_words_respects_count_and_length() {
    let list = words();
    let picked = list.random_words(3, Some(4)).await.expect("Pick failed");
    assert_eq!(picked.len(), 3);
    assert!(picked.iter().all(|w| w.text().len() == 4));

    let err = list.random_words(4, Some(4)).await;
    assert!(err.is_err(), "Only three four-letter words exist");
}

#[tokio::test]
async fn test_random_word_without_length() {
    let list = words();
    let word = list.random_word(None).await.expect("Pick failed");
    assert_eq!(list.id_of(word.text()), Some(*word.id()));

    let empty = WordList::default();
    assert!(empty.random_word(None).await.is_err());
}

#[tokio::test]
async fn test_random_word_with_pattern() {
    let list = words();
    let word = list
        .random_word_with_pattern("b_ts")
        .await
        .expect("Pattern should match");
    assert_eq!(word.text(), "bats");
    assert!(list.random_word_with_pattern("q%").await.is_err());
}

#[tokio::test]
async fn test_word_exists_honours_max_length() {
    let list = words();
    assert!(list.word_exists("b%", None).await.expect("Lookup failed"));
    assert!(list.word_exists("b%", Some(2)).await.expect("Lookup failed"));
    assert!(!list.word_exists("ba%", Some(3)).await.expect("Lookup failed"));
    assert!(list.word_exists("B_SS", None).await.expect("Lookup failed"));
}

#[tokio::test]
async fn test_charset_for_prefix() {
    let list = words();
    let charset: String = list
        .charset_for_prefix("b", 3)
        .await
        .expect("Lookup failed")
        .into_iter()
        .collect();
    assert_eq!(charset, "ae");

    let start: String = list
        .charset_for_prefix("", 1)
        .await
        .expect("Lookup failed")
        .into_iter()
        .collect();
    assert_eq!(start, "_a");

    assert!(
        list.charset_for_prefix("zz", 4)
            .await
            .expect("Lookup failed")
            .is_empty()
    );
}

#[tokio::test]
async fn test_persist_grid_records_entries() {
    let list = words();
    let grid = LetterGrid::from_rows(&["at", "to"]).expect("Valid grid");
    let id = list.persist_grid(&grid, "tiny").await.expect("Persist failed");
    assert_eq!(id, 1);

    let saved = list.saved_grids().expect("Store poisoned");
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "tiny");
    let at = list.id_of("at").expect("Missing word");
    let to = list.id_of("to").expect("Missing word");
    assert_eq!(saved[0].word_ids, vec![at, to, at, to]);
}

#[tokio::test]
async fn test_persist_grid_rejects_unknown_entries() {
    let list = words();
    let grid = LetterGrid::from_rows(&["ab", "to"]).expect("Valid grid");
    assert!(list.persist_grid(&grid, "bad").await.is_err());
    assert!(list.saved_grids().expect("Store poisoned").is_empty());
}
