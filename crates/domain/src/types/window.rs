//! Voting window state
//!
//! Derived, never persisted. Always recomputed from the absolute deadline.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{COUNTDOWN_SUFFIX, VOTING_CLOSED_MESSAGE};

/// Time left before the deadline, truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RemainingTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingTime {
    /// Break a positive duration into hours, minutes and seconds (floor).
    /// Negative input clamps to zero.
    pub fn from_duration(duration: Duration) -> Self {
        let total = duration.num_seconds().max(0);
        Self { hours: total / 3600, minutes: (total % 3600) / 60, seconds: total % 60 }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Whether votes are still accepted by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VotingWindowState {
    Open { remaining: RemainingTime },
    Closed,
}

impl VotingWindowState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Countdown text shown next to the submit button.
    pub fn display_text(&self) -> String {
        match self {
            Self::Open { remaining } => format!("{remaining} {COUNTDOWN_SUFFIX}"),
            Self::Closed => VOTING_CLOSED_MESSAGE.to_string(),
        }
    }
}
