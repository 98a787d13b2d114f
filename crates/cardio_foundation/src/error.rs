//! Error types for Cardio.
//!
//! Uses `thiserror` for ergonomic error definition with context.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout Cardio.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Cardio operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing last name error for a name with no known position.
    #[must_use]
    pub fn missing_last_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingLastName {
            name: name.into(),
            index: None,
        })
    }

    /// Records the position of the offending name in its list.
    #[must_use]
    pub fn at_index(mut self, position: usize) -> Self {
        match &mut self.kind {
            ErrorKind::MissingLastName { index, .. } => *index = Some(position),
        }
        self
    }

    /// Returns the list position of the offending name, if recorded.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match &self.kind {
            ErrorKind::MissingLastName { index, .. } => *index,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A name has no second space-separated token.
    #[error("missing last name in {name:?}{}", fmt_index(.index))]
    MissingLastName {
        /// The offending name, verbatim.
        name: String,
        /// Position of the name in its list.
        index: Option<usize>,
    },
}

fn fmt_index(index: &Option<usize>) -> String {
    index.map_or_else(String::new, |i| format!(" at index {i}"))
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Name of the operation that failed.
    pub operation: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        Ok(())
    }
}
