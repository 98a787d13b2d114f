//! Integration tests for filter_by_length and every_n_person

use cardio::people::{every_n_person, filter_by_length};
use proptest::prelude::*;

const PEOPLE: [&str; 5] = ["Matt", "Kim", "Kanye", "Obama", "Hans"];

#[test]
fn every_n_person_documented_example() {
    assert_eq!(every_n_person(&PEOPLE, 2), vec!["Matt", "Kanye", "Hans"]);
}

#[test]
fn every_n_person_zero_is_independent_copy() {
    let people: Vec<String> = PEOPLE.iter().map(ToString::to_string).collect();
    let mut copy = every_n_person(&people, 0);
    assert_eq!(copy, people);

    copy.clear();
    assert_eq!(people.len(), 5);
}

#[test]
fn every_n_person_one_is_everyone() {
    assert_eq!(every_n_person(&PEOPLE, 1), PEOPLE);
}

#[test]
fn filter_by_length_keeps_order() {
    assert_eq!(filter_by_length(&PEOPLE, 3), vec!["Matt", "Kanye", "Obama", "Hans"]);
    assert!(filter_by_length(&PEOPLE, 5).is_empty());
}

#[test]
fn filter_by_length_accepts_owned_strings() {
    let people = vec![String::from("Kanye West"), String::from("Kim")];
    assert_eq!(filter_by_length(&people, 3), vec!["Kanye West"]);
}

proptest! {
    #[test]
    fn filter_by_length_leaves_input_alone(
        people in prop::collection::vec("[A-Za-z ]{0,10}", 0..12),
        length in -3i64..12
    ) {
        let before = people.clone();
        let _ = filter_by_length(&people, length);
        prop_assert_eq!(people, before);
    }

    #[test]
    fn every_n_person_picks_multiples(
        people in prop::collection::vec("[A-Za-z]{1,6}", 0..20),
        n in 1usize..6
    ) {
        let expected: Vec<String> = people
            .iter()
            .enumerate()
            .filter(|(i, _)| i % n == 0)
            .map(|(_, p)| p.clone())
            .collect();
        prop_assert_eq!(every_n_person(&people, n), expected);
    }
}
