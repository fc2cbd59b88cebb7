//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the submission ports, enabling deterministic
//! tests without a database or network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use datevote_core::submission::ports::{Navigator, NotificationDispatcher, PollRepository};
use datevote_domain::{
    DateVoteError, DraftVote, PersistedVote, Poll, PollId, Result as DomainResult, VoteNotification,
};

/// In-memory mock for `PollRepository`.
///
/// Votes are stamped with a fixed instant so assertions stay deterministic.
/// `failing()` makes every append fail; `stalled()` makes every append hang.
#[derive(Clone)]
pub struct MockPollRepository {
    polls: Arc<Mutex<HashMap<PollId, Poll>>>,
    votes: Arc<Mutex<Vec<PersistedVote>>>,
    stamp: DateTime<Utc>,
    fail_appends: bool,
    stall_appends: bool,
}

impl MockPollRepository {
    pub fn new(stamp: DateTime<Utc>) -> Self {
        Self {
            polls: Arc::default(),
            votes: Arc::default(),
            stamp,
            fail_appends: false,
            stall_appends: false,
        }
    }

    pub fn with_poll(self, poll: Poll) -> Self {
        self.polls.lock().unwrap().insert(poll.id.clone(), poll);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_appends = true;
        self
    }

    pub fn stalled(mut self) -> Self {
        self.stall_appends = true;
        self
    }

    pub fn stored_votes(&self) -> Vec<PersistedVote> {
        self.votes.lock().unwrap().clone()
    }
}

#[async_trait]
impl PollRepository for MockPollRepository {
    async fn find_poll(&self, id: &PollId) -> DomainResult<Option<Poll>> {
        Ok(self.polls.lock().unwrap().get(id).cloned())
    }

    async fn append_vote(&self, poll_id: &PollId, draft: &DraftVote) -> DomainResult<PersistedVote> {
        if self.stall_appends {
            std::future::pending::<()>().await;
        }
        if self.fail_appends {
            return Err(DateVoteError::Database("disk I/O error".to_string()));
        }
        let vote = PersistedVote::from_draft(poll_id.clone(), draft, self.stamp);
        self.votes.lock().unwrap().push(vote.clone());
        Ok(vote)
    }

    async fn insert_poll(&self, poll: &Poll) -> DomainResult<()> {
        self.polls.lock().unwrap().insert(poll.id.clone(), poll.clone());
        Ok(())
    }

    async fn list_votes(&self, poll_id: &PollId) -> DomainResult<Vec<PersistedVote>> {
        Ok(self
            .votes
            .lock()
            .unwrap()
            .iter()
            .filter(|vote| &vote.poll_id == poll_id)
            .cloned()
            .collect())
    }
}

/// Records every notification; optionally rejects them all.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<VoteNotification>>>,
    reject: bool,
}

impl RecordingNotifier {
    pub fn rejecting() -> Self {
        Self { reject: true, ..Self::default() }
    }

    pub fn sent(&self) -> Vec<VoteNotification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingNotifier {
    async fn notify(&self, notification: &VoteNotification) -> DomainResult<()> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.reject {
            return Err(DateVoteError::Network("notify endpoint returned 500".to_string()));
        }
        Ok(())
    }
}

/// Never completes; used to exercise timeouts.
#[derive(Default, Clone)]
pub struct StalledNotifier;

#[async_trait]
impl NotificationDispatcher for StalledNotifier {
    async fn notify(&self, _notification: &VoteNotification) -> DomainResult<()> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

/// Records navigation targets.
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}
