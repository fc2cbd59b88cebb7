//! Countdown scheduler errors

use datevote_domain::DateVoteError;
use thiserror::Error;

use crate::errors::InfraError;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("countdown already running")]
    AlreadyRunning,

    #[error("countdown not running")]
    NotRunning,

    /// The tick task did not finish within the join timeout after cancel.
    #[error("countdown did not stop within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("countdown task failed: {0}")]
    TaskJoinFailed(String),
}

impl From<tokio::task::JoinError> for SchedulerError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::TaskJoinFailed(err.to_string())
    }
}

impl From<SchedulerError> for InfraError {
    fn from(err: SchedulerError) -> Self {
        InfraError(DateVoteError::Internal(err.to_string()))
    }
}

impl From<SchedulerError> for DateVoteError {
    fn from(err: SchedulerError) -> Self {
        InfraError::from(err).into()
    }
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
