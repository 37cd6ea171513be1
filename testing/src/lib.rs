//! # Tasklist Testing
//!
//! Testing utilities and helpers for the tasklist architecture.
//!
//! Provides a fluent Given-When-Then harness for reducers ([`ReducerTest`]),
//! effect assertions, and a deterministic clock for time-dependent logic.


pub use reducer_test::{ReducerTest, assertions};

use chrono::{DateTime, TimeZone, Utc};
use tasklist_core::environment::Clock;

/// Deterministic clock that always returns the same instant
///
/// Use this in tests so timestamps are stable across runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a fixed clock pinned to the given instant
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a clock pinned to a well-known test instant
///
/// # Panics
///
/// Never panics in practice; the embedded timestamp is valid.
#[must_use]
#[allow(clippy::unwrap_used)] // Constant timestamp is always valid
pub fn test_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
}
