//! # DateVote Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite poll/vote storage (rusqlite + r2d2)
//! - The HTTP notification dispatcher
//! - The voting countdown scheduler
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `datevote-core`
//! - Contains all "impure" code (I/O, timers, environment)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod notification;
pub mod scheduling;

// Re-export commonly used items
pub use database::{DbManager, SqlitePollRepository};
pub use errors::InfraError;
pub use http::HttpClient;
pub use notification::HttpNotificationDispatcher;
pub use scheduling::{CountdownScheduler, CountdownSchedulerConfig};
