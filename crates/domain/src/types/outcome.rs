//! Submission outcome
//!
//! Persist and notify are observed independently so the caller can tell the
//! voter exactly what happened.

use serde::{Deserialize, Serialize};

use super::vote::PersistedVote;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Vote stored and organiser notified.
    FullSuccess { vote: PersistedVote },
    /// Vote stored; the notification request failed.
    PersistedNotifyFailed { vote: PersistedVote, reason: String },
    /// Nothing stored; notification was not attempted.
    PersistFailed { reason: String },
}

impl SubmissionOutcome {
    /// The stored vote, when persistence succeeded.
    pub fn vote(&self) -> Option<&PersistedVote> {
        match self {
            Self::FullSuccess { vote } | Self::PersistedNotifyFailed { vote, .. } => Some(vote),
            Self::PersistFailed { .. } => None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.vote().is_some()
    }

    pub fn is_full_success(&self) -> bool {
        matches!(self, Self::FullSuccess { .. })
    }
}
