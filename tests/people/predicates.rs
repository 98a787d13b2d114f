//! Integration tests for everyone_has_letter and someone_has_letter

use cardio::people::{everyone_has_letter, someone_has_letter};
use proptest::prelude::*;

#[test]
fn everyone_has_letter_documented_examples() {
    assert!(everyone_has_letter(&["Kanye", "Kim"], "K"));
    assert!(everyone_has_letter::<&str>(&[], "x"));
}

#[test]
fn someone_has_letter_documented_examples() {
    assert!(!someone_has_letter(&["Kanye", "Obama"], "z"));
    assert!(!someone_has_letter::<&str>(&[], "x"));
}

#[test]
fn empty_letter_matches_everything() {
    assert!(everyone_has_letter(&["", "Kim"], ""));
    assert!(someone_has_letter(&[""], ""));
}

proptest! {
    #[test]
    fn everyone_implies_someone(
        people in prop::collection::vec("[a-c]{0,4}", 1..8),
        letter in "[a-c]"
    ) {
        if everyone_has_letter(&people, &letter) {
            prop_assert!(someone_has_letter(&people, &letter));
        }
    }
}
