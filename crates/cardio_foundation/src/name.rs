//! Parsing of `"First Last"` person names.
//!
//! Names are split on single spaces, so consecutive spaces produce empty
//! tokens and anything past the second token is ignored.

use std::fmt;

use crate::error::{Error, Result};

/// A borrowed view of a person name split into first and last tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PersonName<'a> {
    raw: &'a str,
    first: &'a str,
    last: Option<&'a str>,
}

impl<'a> PersonName<'a> {
    /// Splits `raw` into first and last tokens. Never fails.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut tokens = raw.split(' ');
        // `split` always yields at least one token, possibly empty.
        let first = tokens.next().unwrap_or_default();
        let last = tokens.next();
        Self { raw, first, last }
    }

    /// The full, unmodified name.
    #[must_use]
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The first token.
    #[must_use]
    pub fn first(&self) -> &'a str {
        self.first
    }

    /// The second token, if the name contains a space.
    #[must_use]
    pub fn last(&self) -> Option<&'a str> {
        self.last
    }

    /// The second token, or `""` when absent.
    #[must_use]
    pub fn last_or_empty(&self) -> &'a str {
        self.last.unwrap_or_default()
    }

    /// Returns true if the name has a non-empty second token.
    #[must_use]
    pub fn has_last(&self) -> bool {
        self.last.is_some_and(|last| !last.is_empty())
    }

    /// The second token, rejecting names where it is missing or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingLastName`](crate::ErrorKind::MissingLastName)
    /// if the name has no non-empty second token.
    pub fn require_last(&self) -> Result<&'a str> {
        match self.last {
            Some(last) if !last.is_empty() => Ok(last),
            _ => Err(Error::missing_last_name(self.raw)),
        }
    }

    /// First character of each of the first two tokens, case preserved.
    ///
    /// Missing or empty tokens contribute nothing, so `"Cher"` yields `"C"`.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first
            .chars()
            .take(1)
            .chain(self.last_or_empty().chars().take(1))
            .collect()
    }
}

impl fmt::Display for PersonName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

impl<'a> From<&'a str> for PersonName<'a> {
    fn from(raw: &'a str) -> Self {
        Self::parse(raw)
    }
}
