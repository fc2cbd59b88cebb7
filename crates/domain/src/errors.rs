//! Error types used throughout the application

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for DateVote
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DateVoteError {
    /// The poll id has no record. Surfaced as a distinct "not found" outcome.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The draft vote was rejected before any state was touched.
    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),

    /// The vote could not be saved (or, under collapsed reporting, the
    /// organiser could not be notified).
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DateVoteError {
    /// Message suitable for showing to the voter.
    ///
    /// Infrastructure causes are deliberately not distinguished; every
    /// non-validation failure asks the user to try again.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "This poll could not be found.".to_string(),
            Self::Validation(reason) => reason.user_message().to_string(),
            _ => crate::constants::SUBMISSION_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<ValidationFailure> for DateVoteError {
    fn from(value: ValidationFailure) -> Self {
        Self::Validation(value)
    }
}

/// Reason a draft vote was rejected, in check precedence order.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ValidationFailure {
    #[error("name is required")]
    MissingName,

    #[error("{} date(s) have no response", .missing.len())]
    IncompleteResponses { missing: Vec<NaiveDate> },

    #[error("email address is not well formed")]
    InvalidEmail,
}

impl ValidationFailure {
    /// Blocking prompt text shown by the view layer.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingName => "Please enter your name",
            Self::IncompleteResponses { .. } => "Please complete all dates",
            Self::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// Result type alias for DateVote operations
pub type Result<T> = std::result::Result<T, DateVoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_serializes_with_reason_tag() {
        let failure = ValidationFailure::IncompleteResponses {
            missing: vec![NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()],
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["reason"], "incomplete_responses");
        assert_eq!(json["missing"][0], "2025-06-02");
    }

    #[test]
    fn infrastructure_errors_share_generic_user_message() {
        let db = DateVoteError::Database("disk full".into());
        let net = DateVoteError::Network("connection reset".into());
        assert_eq!(db.user_message(), net.user_message());
        assert!(!db.user_message().contains("disk"));
    }

    #[test]
    fn validation_error_uses_reason_message() {
        let err: DateVoteError = ValidationFailure::MissingName.into();
        assert_eq!(err.user_message(), "Please enter your name");
    }
}
