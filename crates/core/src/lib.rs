//! # DateVote Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for storage, notification and navigation
//! - The voting window clock and draft vote validator
//! - The vote submission service
//! - Share link and message composition
//!
//! ## Architecture Principles
//! - Only depends on `datevote-domain` and `datevote-common`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod share;
pub mod submission;
pub mod voting;

pub use share::ShareLinkComposer;
pub use submission::ports::{Navigator, NotificationDispatcher, PollRepository};
pub use submission::VoteSubmissionService;
pub use voting::{VoteValidator, VotingWindowClock};
