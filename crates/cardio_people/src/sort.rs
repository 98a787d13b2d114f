//! Sorting functions.
//!
//! All sorts operate on a fresh copy of the input and are stable.

use cardio_foundation::{ErrorContext, PersonName, Result};
use tracing::{debug, trace};

use crate::to_owned_names;

/// Names sorted ascending by the whole string, in code-point order.
#[must_use]
pub fn sort_by_first_name<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    let mut sorted = to_owned_names(people);
    sorted.sort();
    sorted
}

/// Names sorted ascending by last name.
///
/// A missing last name compares as `""` and sorts first. Equal last names keep
/// their original relative order.
#[must_use]
pub fn sort_by_last_name<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    trace!(len = people.len(), "sort_by_last_name");
    let mut sorted = to_owned_names(people);
    sorted.sort_by_cached_key(|raw| {
        let name = PersonName::parse(raw);
        if !name.has_last() {
            debug!(name = name.raw(), "name has no last name; sorting as empty");
        }
        name.last_or_empty().to_owned()
    });
    sorted
}

/// Names sorted ascending by last name, rejecting any name without one.
///
/// # Errors
///
/// Returns [`ErrorKind::MissingLastName`](cardio_foundation::ErrorKind::MissingLastName)
/// for the first name lacking a non-empty second token. Nothing is sorted in
/// that case.
pub fn try_sort_by_last_name<S: AsRef<str>>(people: &[S]) -> Result<Vec<String>> {
    trace!(len = people.len(), "try_sort_by_last_name");
    for (index, raw) in people.iter().enumerate() {
        PersonName::parse(raw.as_ref())
            .require_last()
            .map_err(|err| {
                err.at_index(index)
                    .with_context(ErrorContext::new().with_operation("sort_by_last_name"))
            })?;
    }

    let mut sorted = to_owned_names(people);
    sorted.sort_by_cached_key(|raw| last_name_key(raw));
    Ok(sorted)
}

/// Sort key for last-name ordering: the second token, or `""`.
fn last_name_key(raw: &str) -> String {
    PersonName::parse(raw).last_or_empty().to_owned()
}
