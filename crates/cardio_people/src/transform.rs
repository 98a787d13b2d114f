//! Per-name transformations and aggregate counts.

use cardio_foundation::{ErrorContext, PersonName, Result};
use tracing::{debug, trace};

/// Initials of every name, e.g. `"Kanye West"` becomes `"KW"`.
///
/// Names without a last name contribute only their first initial.
#[must_use]
pub fn initials<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    trace!(len = people.len(), "initials");
    people
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let name = PersonName::parse(raw.as_ref());
            if !name.has_last() {
                debug!(index, name = name.raw(), "name has no last name; using first initial only");
            }
            name.initials()
        })
        .collect()
}

/// Initials of every name, rejecting any name without a last name.
///
/// # Errors
///
/// Returns [`ErrorKind::MissingLastName`](cardio_foundation::ErrorKind::MissingLastName)
/// for the first name lacking a non-empty second token.
pub fn try_initials<S: AsRef<str>>(people: &[S]) -> Result<Vec<String>> {
    trace!(len = people.len(), "try_initials");
    people
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let name = PersonName::parse(raw.as_ref());
            name.require_last().map_err(|err| {
                err.at_index(index)
                    .with_context(ErrorContext::new().with_operation("initials"))
            })?;
            Ok(name.initials())
        })
        .collect()
}

/// Each name prefixed with its zero-based position: `"0: Kanye"`.
#[must_use]
pub fn people_with_position<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    people
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{i}: {}", name.as_ref()))
        .collect()
}

/// Total number of characters across all names, spaces included.
///
/// Characters are Unicode scalar values (`char`s), not bytes or UTF-16 code
/// units, so `"😀 X"` counts as 3.
#[must_use]
pub fn count_total_characters<S: AsRef<str>>(people: &[S]) -> usize {
    people.iter().map(|name| name.as_ref().chars().count()).sum()
}
