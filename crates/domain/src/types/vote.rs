//! Vote types

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::poll::PollId;
use crate::impl_text_conversions;

/// An invitee's answer for one candidate date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Yes,
    Maybe,
    No,
}

impl_text_conversions!(Availability {
    Yes => "yes",
    Maybe => "maybe",
    No => "no",
});

/// Per-date answers. A date without a key is unanswered.
pub type Responses = BTreeMap<NaiveDate, Availability>;

/// In-memory vote under construction by the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftVote {
    pub name: String,
    pub email: String,
    pub responses: Responses,
    pub message: String,
}

impl DraftVote {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_response(mut self, date: NaiveDate, availability: Availability) -> Self {
        self.responses.insert(date, availability);
        self
    }

    /// Record (or replace) the answer for a date, returning the previous one.
    pub fn set_response(&mut self, date: NaiveDate, availability: Availability) -> Option<Availability> {
        self.responses.insert(date, availability)
    }

    pub fn response_for(&self, date: &NaiveDate) -> Option<Availability> {
        self.responses.get(date).copied()
    }

    /// Candidate dates that have no answer yet, in the order given.
    pub fn unanswered<'a>(&self, dates: &'a [NaiveDate]) -> Vec<&'a NaiveDate> {
        dates.iter().filter(|date| !self.responses.contains_key(date)).collect()
    }
}

/// Stored vote record. Append-only; duplicates from the same voter are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedVote {
    pub id: Uuid,
    pub poll_id: PollId,
    pub name: String,
    pub email: Option<String>,
    pub responses: Responses,
    pub message: Option<String>,
    /// Assigned by storage at append time.
    pub created_at: DateTime<Utc>,
}

impl PersistedVote {
    /// Build the stored record for a draft, assigning id and creation instant.
    pub fn from_draft(poll_id: PollId, draft: &DraftVote, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            poll_id,
            name: draft.name.clone(),
            email: optional_text(&draft.email),
            responses: draft.responses.clone(),
            message: optional_text(&draft.message),
            created_at,
        }
    }
}

fn optional_text(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
