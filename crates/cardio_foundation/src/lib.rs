//! Core types, errors, and name parsing for Cardio.
//!
//! This crate provides:
//! - [`PersonName`] - A borrowed first/last view of a `"First Last"` string
//! - [`NameConfig`] - How malformed names are treated by structure-dependent operations
//! - [`Error`] - Error types with operation context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod name;

pub use config::{MalformedNamePolicy, NameConfig};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use name::PersonName;
