//! Domain types and models

pub mod notification;
pub mod outcome;
pub mod poll;
pub mod share;
pub mod vote;
pub mod window;

pub use notification::VoteNotification;
pub use outcome::SubmissionOutcome;
pub use poll::{results_path_for, Poll, PollId};
pub use share::{LinkPreview, ShareAction, ShareChannel};
pub use vote::{Availability, DraftVote, PersistedVote, Responses};
pub use window::{RemainingTime, VotingWindowState};
