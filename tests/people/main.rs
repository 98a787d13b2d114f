//! Integration tests for Layer 1: People
//!
//! Tests for filtering, transformation, sorting, predicates, and Roster.

mod filtering;
mod predicates;
mod roster;

/// Routes library `tracing` output through the test harness.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cardio_people=debug")),
        )
        .with_test_writer()
        .try_init();
}
