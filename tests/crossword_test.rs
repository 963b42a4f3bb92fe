//! Tests for crossword layout validation and cell access.

use std::sync::Arc;

use strictly_crossword::{Clue, Crossword, Direction, PuzzleErrorKind, Word, validate_layout};

fn word(text: &str, row: usize, col: usize, direction: Direction) -> Word {
    Word::new(None, text, Clue::new(format!("Clue for {text}")), row, col, direction)
        .expect("Failed to create word")
}

fn cat_cog() -> Crossword {
    Crossword::new(vec![
        word("cat", 0, 0, Direction::Across),
        word("cog", 0, 0, Direction::Down),
    ])
    .expect("Failed to build crossword")
}

#[test]
fn test_extents_follow_furthest_word() {
    let crossword = cat_cog();
    assert_eq!(crossword.rows(), 3);
    assert_eq!(crossword.cols(), 3);
    assert_eq!(crossword.clues().len(), 2);

    let wide = Crossword::new(vec![
        word("cat", 0, 0, Direction::Across),
        word("tea", 0, 2, Direction::Down),
        word("at", 2, 2, Direction::Across),
    ])
    .expect("Failed to build crossword");
    assert_eq!((wide.rows(), wide.cols()), (3, 4));
}

#[test]
fn test_empty_word_list_is_empty_grid() {
    let crossword = Crossword::new(Vec::new()).expect("Empty list should build");
    assert_eq!((crossword.rows(), crossword.cols()), (0, 0));
}

#[test]
fn test_conflicting_overlap_fails() {
    let err = Crossword::new(vec![
        word("cat", 0, 0, Direction::Across),
        word("dog", 0, 0, Direction::Down),
    ])
    .expect_err("Conflict should fail");
    match err.kind() {
        PuzzleErrorKind::InvalidWordOverlap(words) => {
            assert_eq!(words.len(), 1);
            assert_eq!(words[0].text(), "dog");
        }
        other => panic!("Unexpected error kind: {other}"),
    }
}

#[test]
fn test_validate_layout_reports_shape() {
    let shape = validate_layout(&[
        word("cat", 1, 0, Direction::Across),
        word("ark", 1, 1, Direction::Down),
    ])
    .expect("Layout should validate");
    assert_eq!((shape.rows, shape.cols), (4, 3));
}

#[test]
fn test_char_at_and_uncovered_cells() {
    let crossword = cat_cog();
    assert_eq!(crossword.char_at(0, 0), Some('c'));
    assert_eq!(crossword.char_at(0, 2), Some('t'));
    assert_eq!(crossword.char_at(2, 0), Some('g'));
    assert_eq!(crossword.char_at(1, 1), None);
    assert!(!crossword.intersects_word(1, 1));
    assert!(crossword.intersects_word(1, 0));
}

#[test]
fn test_set_char_at_updates_both_words() {
    let mut crossword = cat_cog();
    crossword.set_char_at(0, 0, "x").expect("Set failed");
    assert_eq!(crossword.char_at(0, 0), Some('x'));

    let across = crossword.word(0, 0, Direction::Across).expect("Missing across");
    let down = crossword.word(0, 0, Direction::Down).expect("Missing down");
    assert_eq!(across.text(), "xat");
    assert_eq!(down.text(), "xog");
}

#[test]
fn test_set_char_at_out_of_extents_fails() {
    let mut crossword = cat_cog();
    let err = crossword
        .set_char_at(3, 0, "a")
        .expect_err("Row past extents should fail");
    assert!(matches!(err.kind(), PuzzleErrorKind::IndexOutOfBounds { .. }));
}

#[test]
fn test_set_char_at_uncovered_cell_is_ignored() {
    let mut crossword = cat_cog();
    crossword.set_char_at(1, 1, "z").expect("Uncovered set should succeed");
    assert_eq!(crossword.char_at(1, 1), None);
}

#[test]
fn test_set_char_at_propagates_word_errors() {
    let mut crossword = cat_cog();
    let err = crossword
        .set_char_at(0, 1, "7")
        .expect_err("Digit should fail");
    assert!(matches!(err.kind(), PuzzleErrorKind::InvalidCharType(_)));
    assert_eq!(crossword.char_at(0, 1), Some('a'));
}

#[test]
fn test_word_lookup_by_direction() {
    let crossword = cat_cog();
    assert_eq!(
        crossword
            .word(0, 1, Direction::Across)
            .map(|w| w.text()),
        Some("cat".to_string())
    );
    assert!(crossword.word(0, 1, Direction::Down).is_none());
}

#[test]
fn test_clues_follow_word_order() {
    let crossword = cat_cog();
    let clues = crossword.clues();
    assert_eq!(clues[0].text(), "Clue for cat");
    assert_eq!(clues[1].text(), "Clue for cog");
}

#[test]
fn test_copies_are_independent_and_share_clues() {
    let crossword = cat_cog();

    let mut full = crossword.full_copy().expect("Full copy failed");
    full.set_char_at(0, 1, "u").expect("Set failed");
    assert_eq!(full.char_at(0, 1), Some('u'));
    assert_eq!(crossword.char_at(0, 1), Some('a'));

    let blank = crossword.blank_copy().expect("Blank copy failed");
    assert_eq!(blank.char_at(0, 0), Some('_'));
    assert_eq!((blank.rows(), blank.cols()), (3, 3));
    assert!(Arc::ptr_eq(&blank.clues()[0], &crossword.clues()[0]));
}

#[test]
fn test_display_marks_empty_cells() {
    let rendered = cat_cog().to_string();
    assert_eq!(rendered, "c a t\no # #\ng # #\n");
}
