//! Time utilities and abstractions
//!
//! Deadline computations read "now" through [`Clock`] rather than calling
//! `Utc::now()` directly, so tests can place the clock anywhere relative to a
//! poll's creation instant.

pub mod clock;

pub use clock::{Clock, SystemClock};
#[cfg(any(feature = "test-utils", test))]
pub use crate::testing::clock::MockClock;
