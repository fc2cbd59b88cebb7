//! Voting window and draft vote checks

pub mod validator;
pub mod window;

pub use validator::VoteValidator;
pub use window::{evaluate, VotingWindowClock};
