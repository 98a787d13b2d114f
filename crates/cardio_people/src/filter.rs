//! Filtering functions.

use crate::to_owned_names;

/// Names whose character count, spaces included, is strictly greater than `length`.
///
/// Characters are Unicode scalar values (`char`s), not bytes or UTF-16 code
/// units, so `"😀 X"` counts as 3.
///
/// A negative `length` keeps every name.
#[must_use]
pub fn filter_by_length<S: AsRef<str>>(people: &[S], length: i64) -> Vec<String> {
    people
        .iter()
        .map(|p| p.as_ref())
        .filter(|name| {
            let count = i64::try_from(name.chars().count()).unwrap_or(i64::MAX);
            count > length
        })
        .map(str::to_owned)
        .collect()
}

/// Every `n`th person, starting with the first (indices `0, n, 2n, ...`).
///
/// `n == 0` returns a copy of the whole list.
#[must_use]
pub fn every_n_person<S: AsRef<str>>(people: &[S], n: usize) -> Vec<String> {
    if n == 0 {
        return to_owned_names(people);
    }
    people
        .iter()
        .step_by(n)
        .map(|p| p.as_ref().to_owned())
        .collect()
}
