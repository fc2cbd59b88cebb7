//! Shared test helpers for `datevote-core` integration tests.
//!
//! In-memory port implementations plus poll fixtures, so scenario tests can
//! focus on behaviour instead of wiring.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
