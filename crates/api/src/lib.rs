//! # DateVote App
//!
//! Application layer - the poll view command surface.
//!
//! This crate contains:
//! - `PollView` commands (view layer → backend bridge)
//! - Application context (dependency injection)
//! - Logging setup and command logging helpers
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Reports host side effects as `ViewEffect`s

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
