//! Integration tests for Roster
//!
//! Tests that the malformed-name policy is applied uniformly.

use cardio::foundation::{ErrorKind, MalformedNamePolicy, NameConfig};
use cardio::people::Roster;

use crate::init_tracing;

const PEOPLE: [&str; 4] = ["Kanye West", "Barack Obama", "Hans Zimmer", "Kim"];

#[test]
fn lenient_roster_matches_free_functions() {
    init_tracing();
    let roster = Roster::new(&PEOPLE);
    assert_eq!(roster.initials().unwrap(), vec!["KW", "BO", "HZ", "K"]);
    assert_eq!(
        roster.sort_by_last_name().unwrap(),
        vec!["Kim", "Barack Obama", "Kanye West", "Hans Zimmer"]
    );
}

#[test]
fn strict_roster_fails_both_structure_operations() {
    let config = NameConfig::default().with_policy(MalformedNamePolicy::Strict);
    let roster = Roster::with_config(&PEOPLE, config);

    for err in [
        roster.initials().unwrap_err(),
        roster.sort_by_last_name().unwrap_err(),
    ] {
        assert!(matches!(err.kind, ErrorKind::MissingLastName { index: Some(3), .. }));
    }
}

#[test]
fn strict_roster_succeeds_on_well_formed_names() {
    let roster = Roster::with_config(&PEOPLE[..3], NameConfig::strict());
    assert_eq!(roster.initials().unwrap(), vec!["KW", "BO", "HZ"]);
}

#[test]
fn roster_counts_and_predicates() {
    let roster = Roster::new(&PEOPLE);
    assert_eq!(roster.count_total_characters(), 10 + 12 + 11 + 3);
    assert!(roster.someone_has_letter("Z"));
    assert!(!roster.everyone_has_letter(" "));
    assert_eq!(roster.every_n_person(3), vec!["Kanye West", "Kim"]);
}
