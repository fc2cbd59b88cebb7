//! Poll types
//!
//! A poll is created by the organiser elsewhere and is read-only here.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_EVENT_TITLE, DEFAULT_LOCATION, DEFAULT_ORGANISER_NAME, POLL_PATH_PREFIX,
    RESULTS_PATH_PREFIX,
};

/// Opaque, stable poll identifier. Votes reference their poll by this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollId(String);

impl PollId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier for a newly created poll.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PollId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PollId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Organiser-created poll document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: PollId,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub organiser_first_name: Option<String>,
    #[serde(default)]
    pub organiser_email: Option<String>,
    /// Candidate dates in display order.
    pub dates: Vec<NaiveDate>,
    /// Missing on historical records; such polls never close.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Poll {
    pub fn new(id: impl Into<PollId>, dates: Vec<NaiveDate>) -> Self {
        Self {
            id: id.into(),
            event_title: None,
            location: None,
            organiser_first_name: None,
            organiser_email: None,
            dates,
            created_at: None,
        }
    }

    pub fn with_event_title(mut self, title: impl Into<String>) -> Self {
        self.event_title = Some(title.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_organiser(mut self, first_name: impl Into<String>, email: impl Into<String>) -> Self {
        self.organiser_first_name = Some(first_name.into());
        self.organiser_email = Some(email.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Event title, or "an event" when absent or empty.
    pub fn event_title_or_default(&self) -> &str {
        non_empty(self.event_title.as_deref()).unwrap_or(DEFAULT_EVENT_TITLE)
    }

    /// Location, or "somewhere" when absent or empty.
    pub fn location_or_default(&self) -> &str {
        non_empty(self.location.as_deref()).unwrap_or(DEFAULT_LOCATION)
    }

    /// Organiser first name, or "Someone" when absent or empty.
    pub fn organiser_name_or_default(&self) -> &str {
        non_empty(self.organiser_first_name.as_deref()).unwrap_or(DEFAULT_ORGANISER_NAME)
    }

    /// End of the voting window, if the poll records its creation instant.
    pub fn deadline(&self, window: Duration) -> Option<DateTime<Utc>> {
        self.created_at.and_then(|created| created.checked_add_signed(window))
    }

    /// Relative path of the voting page.
    pub fn poll_path(&self) -> String {
        format!("{POLL_PATH_PREFIX}/{}", self.id)
    }

    /// Relative path of the results page.
    pub fn results_path(&self) -> String {
        results_path_for(&self.id)
    }
}

/// Results page path for a poll id.
pub fn results_path_for(id: &PollId) -> String {
    format!("{RESULTS_PATH_PREFIX}/{id}")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
