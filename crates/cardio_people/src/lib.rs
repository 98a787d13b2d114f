//! Non-destructive functions over lists of person names.
//!
//! Every function borrows its input and returns a freshly allocated result,
//! grouped by category:
//! - Filtering (by length, every nth person)
//! - Transformation (initials, positions, character counts)
//! - Sorting (by whole name, by last name)
//! - Predicates (letter membership across all or any names)
//!
//! [`Roster`] bundles a list with a [`NameConfig`] so the operations that
//! depend on name structure share one malformed-name policy.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod filter;
pub mod predicates;
pub mod roster;
pub mod sort;
pub mod transform;

pub use cardio_foundation::{Error, ErrorKind, MalformedNamePolicy, NameConfig, PersonName, Result};
pub use filter::{every_n_person, filter_by_length};
pub use predicates::{everyone_has_letter, someone_has_letter};
pub use roster::Roster;
pub use sort::{sort_by_first_name, sort_by_last_name, try_sort_by_last_name};
pub use transform::{count_total_characters, initials, people_with_position, try_initials};

/// Copies a borrowed name list into owned strings.
pub(crate) fn to_owned_names<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    people.iter().map(|p| p.as_ref().to_owned()).collect()
}
