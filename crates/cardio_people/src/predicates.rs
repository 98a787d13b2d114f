//! Letter membership predicates.
//!
//! `letter` is matched as a case-sensitive substring, so it may be longer than
//! one character.

/// Returns true if every name contains `letter`. True for an empty list.
#[must_use]
pub fn everyone_has_letter<S: AsRef<str>>(people: &[S], letter: &str) -> bool {
    people.iter().all(|name| name.as_ref().contains(letter))
}

/// Returns true if at least one name contains `letter`. False for an empty list.
#[must_use]
pub fn someone_has_letter<S: AsRef<str>>(people: &[S], letter: &str) -> bool {
    people.iter().any(|name| name.as_ref().contains(letter))
}
