//! Port interfaces for vote submission
//!
//! These traits define the boundaries between the submission workflow and
//! the storage, notification and navigation implementations.

use async_trait::async_trait;
use datevote_domain::{DraftVote, PersistedVote, Poll, PollId, Result, VoteNotification};

/// Poll and vote storage
#[async_trait]
pub trait PollRepository: Send + Sync {
    /// Read a poll by id. `Ok(None)` when no record exists.
    async fn find_poll(&self, id: &PollId) -> Result<Option<Poll>>;

    /// Append a vote under `poll_id`, assigning its id and creation instant.
    ///
    /// Votes are append-only; the same voter may vote more than once.
    async fn append_vote(&self, poll_id: &PollId, draft: &DraftVote) -> Result<PersistedVote>;

    /// Store a new poll.
    async fn insert_poll(&self, poll: &Poll) -> Result<()>;

    /// All votes for a poll, oldest first.
    async fn list_votes(&self, poll_id: &PollId) -> Result<Vec<PersistedVote>>;
}

/// Organiser notification channel
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Send one notification. Any rejection or transport failure is an error;
    /// callers do not retry.
    async fn notify(&self, notification: &VoteNotification) -> Result<()>;
}

/// Host view navigation
pub trait Navigator: Send + Sync {
    /// Replace the current view with `path`.
    fn navigate(&self, path: &str);
}
