//! Vote submission workflow

pub mod ports;
pub mod service;

pub use service::VoteSubmissionService;
