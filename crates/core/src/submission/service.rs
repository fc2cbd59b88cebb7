//! Vote submission service - validate, persist, notify, navigate

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use datevote_domain::{
    results_path_for, DateVoteError, DraftVote, FailureReporting, NotificationConfig, Poll,
    Result, SubmissionConfig, SubmissionOutcome, VoteNotification,
};
use tracing::{debug, info, instrument, warn};

use super::ports::{Navigator, NotificationDispatcher, PollRepository};
use crate::voting::VoteValidator;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs a vote submission strictly in sequence: persist, then notify, then
/// navigate to the poll's results.
///
/// A persistence failure is terminal. What a notification failure looks like
/// to the caller depends on the configured [`FailureReporting`] policy.
pub struct VoteSubmissionService {
    repository: Arc<dyn PollRepository>,
    notifier: Arc<dyn NotificationDispatcher>,
    navigator: Arc<dyn Navigator>,
    validator: VoteValidator,
    failure_reporting: FailureReporting,
    persist_timeout: Duration,
    notify_timeout: Duration,
}

impl VoteSubmissionService {
    /// Create a service with distinct failure reporting and default timeouts
    pub fn new(
        repository: Arc<dyn PollRepository>,
        notifier: Arc<dyn NotificationDispatcher>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            repository,
            notifier,
            navigator,
            validator: VoteValidator::new(),
            failure_reporting: FailureReporting::default(),
            persist_timeout: DEFAULT_TIMEOUT,
            notify_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_failure_reporting(mut self, policy: FailureReporting) -> Self {
        self.failure_reporting = policy;
        self
    }

    pub fn with_persist_timeout(mut self, timeout: Duration) -> Self {
        self.persist_timeout = timeout;
        self
    }

    pub fn with_notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    /// Apply the submission and notification sections of the configuration.
    pub fn configured(self, submission: &SubmissionConfig, notification: &NotificationConfig) -> Self {
        self.with_failure_reporting(submission.failure_reporting)
            .with_persist_timeout(Duration::from_secs(submission.persist_timeout_seconds))
            .with_notify_timeout(Duration::from_secs(notification.timeout_seconds))
    }

    pub fn failure_reporting(&self) -> FailureReporting {
        self.failure_reporting
    }

    /// Validate and submit a draft vote for `poll`.
    ///
    /// Returns `Err(Validation)` without touching storage when the draft is
    /// rejected, and `Err(SubmissionFailed)` when nothing was stored. Under
    /// [`FailureReporting::Collapsed`] a notification failure is also reported
    /// as `SubmissionFailed`, although the vote stays stored.
    ///
    /// Navigation to the results view happens whenever the returned value is
    /// `Ok`.
    #[instrument(skip(self, poll, draft), fields(poll_id = %poll.id, policy = %self.failure_reporting))]
    pub async fn submit(&self, poll: &Poll, draft: &DraftVote) -> Result<SubmissionOutcome> {
        self.validator.validate(draft, &poll.dates)?;

        let outcome = self.persist_and_notify(poll, draft).await;
        match (&outcome, self.failure_reporting) {
            (SubmissionOutcome::PersistFailed { reason }, _) => {
                Err(DateVoteError::SubmissionFailed(reason.clone()))
            }
            (SubmissionOutcome::PersistedNotifyFailed { reason, .. }, FailureReporting::Collapsed) => {
                Err(DateVoteError::SubmissionFailed(reason.clone()))
            }
            _ => {
                let path = results_path_for(&poll.id);
                debug!(%path, "navigating to results");
                self.navigator.navigate(&path);
                Ok(outcome)
            }
        }
    }

    /// Persist then notify, reporting each step independently.
    ///
    /// Performs no validation and no navigation.
    pub async fn persist_and_notify(&self, poll: &Poll, draft: &DraftVote) -> SubmissionOutcome {
        let persisted = with_timeout(
            self.persist_timeout,
            "persist",
            self.repository.append_vote(&poll.id, draft),
        )
        .await;

        let vote = match persisted {
            Ok(vote) => vote,
            Err(err) => {
                warn!(poll_id = %poll.id, error = %err, "failed to persist vote");
                return SubmissionOutcome::PersistFailed { reason: err.to_string() };
            }
        };
        info!(poll_id = %poll.id, vote_id = %vote.id, "vote persisted");

        let notification = VoteNotification::for_vote(poll, &vote);
        match with_timeout(self.notify_timeout, "notify", self.notifier.notify(&notification)).await {
            Ok(()) => {
                info!(poll_id = %poll.id, vote_id = %vote.id, "organiser notified");
                SubmissionOutcome::FullSuccess { vote }
            }
            Err(err) => {
                warn!(poll_id = %poll.id, vote_id = %vote.id, error = %err, "organiser notification failed");
                SubmissionOutcome::PersistedNotifyFailed { vote, reason: err.to_string() }
            }
        }
    }
}

async fn with_timeout<T>(
    limit: Duration,
    step: &'static str,
    future: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => Err(DateVoteError::Network(format!("{step} timed out after {}s", limit.as_secs()))),
    }
}
