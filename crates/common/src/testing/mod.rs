//! Testing utilities
//!
//! Enabled for this crate's own tests and for downstream crates through the
//! `test-utils` feature.

pub mod clock;

pub use clock::MockClock;
