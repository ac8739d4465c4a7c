//! FILENAME: core/engine/tests/test_tape.rs
//! Integration tests for tape growth, padding, and resize behavior.

mod common;

use common::SessionHarness;
use engine::row_capacity_for_height;

#[test]
fn test_tape_keeps_length_while_padding_remains() {
    let mut harness = SessionHarness::new(4);
    assert_eq!(harness.rows().len(), 4);

    // One completed equation produces four rows; they all land in padding.
    harness.press_all(&["5", "+", "3", "="]);
    assert_eq!(harness.rows().len(), 4);
    assert_eq!(harness.printed().len(), 3);
}

#[test]
fn test_tape_grows_once_padding_is_consumed() {
    let mut harness = SessionHarness::new(2);
    harness.press_all(&["5", "+", "3", "="]);

    // Two of the four rows consumed the padding; the rest grew the tape.
    assert_eq!(harness.rows().len(), 4);

    harness.press_all(&["1", "+", "1", "="]);
    assert_eq!(harness.rows().len(), 8);
}

#[test]
fn test_padding_scrolls_off_before_real_rows() {
    let mut harness = SessionHarness::new(3);
    harness.press_all(&["5", "+", "3", "="]);

    // The three placeholder rows absorbed the first three pushes; only the
    // spacer grew the tape, and every real row is still visible.
    let rows = harness.rows();
    assert_eq!(rows.len(), 4);
    assert_eq!(harness.printed(), vec![
        ("".to_string(), "5".to_string()),
        ("+".to_string(), "3".to_string()),
        ("=".to_string(), "8".to_string()),
    ]);
    assert!(rows[0].operator.is_empty() && rows[0].text == "5");
}

#[test]
fn test_resize_to_current_row_count_is_noop() {
    let mut harness = SessionHarness::new(4);
    harness.press_all(&["5", "+", "3", "="]);
    let before = harness.rows();

    harness.session.resize(4);
    assert_eq!(harness.rows(), before);
    assert_eq!(harness.display(), ("=", "8"));
}

#[test]
fn test_resize_to_new_row_count_resets_session() {
    let mut harness = SessionHarness::new(4);
    harness.press_all(&["5", "+", "3", "="]);

    harness.session.resize(7);
    assert_eq!(harness.display(), ("", "0"));
    let rows = harness.rows();
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|row| row.is_blank()));
}

#[test]
fn test_resize_compares_against_grown_length() {
    let mut harness = SessionHarness::new(2);
    harness.press_all(&["5", "+", "3", "="]);
    assert_eq!(harness.rows().len(), 4);

    // The configured capacity was 2, but the tape has grown to 4 rows, so
    // a hint of 4 changes nothing.
    harness.session.resize(4);
    assert_eq!(harness.display(), ("=", "8"));

    harness.session.resize(2);
    assert_eq!(harness.display(), ("", "0"));
    assert_eq!(harness.rows().len(), 2);
}

#[test]
fn test_capacity_follows_visible_height() {
    // 100pt of tape at 41pt per row leaves room for 2 rows plus headroom.
    let mut harness = SessionHarness::new(row_capacity_for_height(100.0));
    assert_eq!(harness.rows().len(), 4);

    harness.session.resize(row_capacity_for_height(451.0));
    assert_eq!(harness.rows().len(), 13);
}
