//! A name list paired with the configuration its operations share.

use cardio_foundation::{MalformedNamePolicy, NameConfig, Result};

use crate::{filter, predicates, sort, transform};

/// A borrowed list of names with a [`NameConfig`].
///
/// Operations that need a last name follow `config.policy`; everything else
/// behaves exactly like the free functions.
#[derive(Clone, Copy, Debug)]
pub struct Roster<'a, S> {
    people: &'a [S],
    config: NameConfig,
}

impl<'a, S: AsRef<str>> Roster<'a, S> {
    /// Creates a roster with the default (lenient) configuration.
    #[must_use]
    pub fn new(people: &'a [S]) -> Self {
        Self::with_config(people, NameConfig::default())
    }

    /// Creates a roster with the given configuration.
    #[must_use]
    pub fn with_config(people: &'a [S], config: NameConfig) -> Self {
        Self { people, config }
    }

    /// The underlying names.
    #[must_use]
    pub fn people(&self) -> &'a [S] {
        self.people
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> NameConfig {
        self.config
    }

    /// See [`filter::filter_by_length`].
    #[must_use]
    pub fn filter_by_length(&self, length: i64) -> Vec<String> {
        filter::filter_by_length(self.people, length)
    }

    /// See [`filter::every_n_person`].
    #[must_use]
    pub fn every_n_person(&self, n: usize) -> Vec<String> {
        filter::every_n_person(self.people, n)
    }

    /// Initials of every name under the configured policy.
    ///
    /// # Errors
    ///
    /// Under [`MalformedNamePolicy::Strict`], fails on the first name without a
    /// last name.
    pub fn initials(&self) -> Result<Vec<String>> {
        match self.config.policy {
            MalformedNamePolicy::Lenient => Ok(transform::initials(self.people)),
            MalformedNamePolicy::Strict => transform::try_initials(self.people),
        }
    }

    /// See [`transform::people_with_position`].
    #[must_use]
    pub fn people_with_position(&self) -> Vec<String> {
        transform::people_with_position(self.people)
    }

    /// See [`sort::sort_by_first_name`].
    #[must_use]
    pub fn sort_by_first_name(&self) -> Vec<String> {
        sort::sort_by_first_name(self.people)
    }

    /// Names sorted by last name under the configured policy.
    ///
    /// # Errors
    ///
    /// Under [`MalformedNamePolicy::Strict`], fails on the first name without a
    /// last name.
    pub fn sort_by_last_name(&self) -> Result<Vec<String>> {
        match self.config.policy {
            MalformedNamePolicy::Lenient => Ok(sort::sort_by_last_name(self.people)),
            MalformedNamePolicy::Strict => sort::try_sort_by_last_name(self.people),
        }
    }

    /// See [`transform::count_total_characters`].
    #[must_use]
    pub fn count_total_characters(&self) -> usize {
        transform::count_total_characters(self.people)
    }

    /// See [`predicates::everyone_has_letter`].
    #[must_use]
    pub fn everyone_has_letter(&self, letter: &str) -> bool {
        predicates::everyone_has_letter(self.people, letter)
    }

    /// See [`predicates::someone_has_letter`].
    #[must_use]
    pub fn someone_has_letter(&self, letter: &str) -> bool {
        predicates::someone_has_letter(self.people, letter)
    }
}
