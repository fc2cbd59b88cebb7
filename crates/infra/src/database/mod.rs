//! Database implementations

pub mod manager;
pub mod poll_repository;

pub use manager::*;
pub use poll_repository::*;
