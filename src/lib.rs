//! Cardio - Non-destructive utilities over lists of person names
//!
//! This crate re-exports both layers of the Cardio system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: cardio_people     — Filtering, sorting, predicates, Roster
//! Layer 0: cardio_foundation — Core types (PersonName, NameConfig, Error)
//! ```

pub use cardio_foundation as foundation;
pub use cardio_people as people;
