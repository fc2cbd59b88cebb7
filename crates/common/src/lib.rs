//! Common utilities shared across DateVote crates.
//!
//! - [`time`]: wall-clock abstraction so deadline logic can be driven by a
//!   mock clock in tests
//! - [`validation`]: small field validators for user-entered text
//! - [`testing`]: deterministic helpers (behind the `test-utils` feature)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod time;
pub mod validation;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use time::{Clock, SystemClock};
pub use validation::{EmailShapeValidator, FieldValidator, NonBlankValidator};
