//! Tests for word construction, editing and copies.

use std::sync::Arc;

use strictly_crossword::{Clue, Direction, PuzzleErrorKind, Word};

fn cat() -> Word {
    Word::new(Some(7), "cat", Clue::new("Feline"), 2, 1, Direction::Across)
        .expect("Failed to create word")
}

#[test]
fn test_new_word_places_its_clue() {
    let across = cat();
    assert_eq!(across.clue().direction(), Direction::Across);
    assert_eq!(across.clue().order(), 2);

    let down = Word::new(None, "cog", Clue::new("Gear tooth"), 0, 4, Direction::Down)
        .expect("Failed to create word");
    assert_eq!(down.clue().direction(), Direction::Down);
    assert_eq!(down.clue().order(), 4);
    assert_eq!(down.id(), None);
}

#[test]
fn test_empty_word_fails() {
    let err = Word::new(None, "", Clue::new("Nothing"), 0, 0, Direction::Across)
        .expect_err("Empty word should fail");
    assert_eq!(err.kind(), &PuzzleErrorKind::EmptyInput);
}

#[test]
fn test_empty_word_error_points_at_caller() {
    let line = line!() + 1;
    let err = Word::new(None, "", Clue::new("Nothing"), 0, 0, Direction::Down).unwrap_err();
    assert!(err.file.ends_with("word_test.rs"), "recorded {}", err.file);
    assert_eq!(err.line, line);
}

#[test]
fn test_set_char_at_lowercases() {
    let mut word = cat();
    word.set_char_at(0, "B").expect("Set failed");
    assert_eq!(word.text(), "bat");
    assert_eq!(word.length(), 3);
}

#[test]
fn test_set_char_at_rejects_out_of_range_index() {
    let mut word = cat();
    let err = word.set_char_at(3, "a").expect_err("Index == length should fail");
    assert!(matches!(
        err.kind(),
        PuzzleErrorKind::IndexOutOfBounds { index: 3, length: 3 }
    ));

    // a -1 index arrives as usize::MAX
    let err = word
        .set_char_at(usize::MAX, "a")
        .expect_err("Wrapped index should fail");
    assert!(matches!(err.kind(), PuzzleErrorKind::IndexOutOfBounds { .. }));
}

#[test]
fn test_set_char_at_rejects_bad_lengths() {
    let mut word = cat();
    for input in ["", "ab"] {
        let err = word.set_char_at(0, input).expect_err("Bad length should fail");
        assert!(matches!(err.kind(), PuzzleErrorKind::InvalidCharLength(_)));
    }
    assert_eq!(word.text(), "cat");
}

#[test]
fn test_set_char_at_rejects_non_letters() {
    let mut word = cat();
    for input in ["1", "!", " ", "é"] {
        let err = word.set_char_at(1, input).expect_err("Non-letter should fail");
        assert!(matches!(err.kind(), PuzzleErrorKind::InvalidCharType(_)));
    }
}

#[test]
fn test_copy_is_independent_but_shares_clue() {
    let original = cat();
    let mut copy = original.copy();
    assert_eq!(copy.text(), original.text());
    assert!(Arc::ptr_eq(copy.clue(), original.clue()));

    copy.set_char_at(2, "r").expect("Set failed");
    assert_eq!(copy.text(), "car");
    assert_eq!(original.text(), "cat");
}

#[test]
fn test_blank_copy_is_placeholders() {
    let original = cat();
    let blank = original.blank_copy();
    assert_eq!(blank.text(), "___");
    assert_eq!(blank.length(), original.length());
    assert_eq!((blank.row(), blank.col()), (2, 1));
    assert!(Arc::ptr_eq(blank.clue(), original.clue()));
}

#[test]
fn test_covers_follows_direction() {
    let word = cat();
    assert!(word.covers(2, 1));
    assert!(word.covers(2, 3));
    assert!(!word.covers(2, 4));
    assert!(!word.covers(3, 1));
    assert_eq!(word.index_of(2, 2), Some(1));
}
