//! Conversions from SQLite, pool, JSON and HTTP failures into domain errors.
//!
//! Every storage failure surfaces as `DateVoteError::Database`; lookups that
//! may miss use `.optional()` and never reach this mapping.

use datevote_domain::DateVoteError;
use rusqlite::ffi::ErrorCode;

/// Newtype carrying a converted domain error out of the infrastructure layer.
#[derive(Debug)]
pub struct InfraError(pub DateVoteError);

impl From<InfraError> for DateVoteError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DateVoteError> for InfraError {
    fn from(value: DateVoteError) -> Self {
        InfraError(value)
    }
}

const SQLITE_CONSTRAINT_FOREIGNKEY: i32 = 787;
const SQLITE_CONSTRAINT_PRIMARYKEY: i32 = 1555;

fn storage(message: impl Into<String>) -> InfraError {
    InfraError(DateVoteError::Database(message.into()))
}

impl From<rusqlite::Error> for InfraError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(failure, detail) => match failure.code {
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
                    storage("vote store is busy, try again")
                }
                ErrorCode::ConstraintViolation => match failure.extended_code {
                    SQLITE_CONSTRAINT_FOREIGNKEY => storage("vote references an unknown poll"),
                    SQLITE_CONSTRAINT_PRIMARYKEY => storage("poll id already exists"),
                    code => storage(format!(
                        "constraint violation (code {code}): {}",
                        detail.unwrap_or_default()
                    )),
                },
                _ => storage(format!("sqlite {:?}: {}", failure.code, detail.unwrap_or_default())),
            },
            rusqlite::Error::FromSqlConversionFailure(column, _, cause) => {
                storage(format!("stored value in column {column} is unreadable: {cause}"))
            }
            other => storage(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        storage(format!("no storage connection available: {value}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(DateVoteError::Internal(format!("JSON column encoding failed: {value}")))
    }
}

impl From<reqwest::Error> for InfraError {
    fn from(value: reqwest::Error) -> Self {
        let mapped = if value.is_timeout() {
            DateVoteError::Network("HTTP request timed out".into())
        } else if let Some(status) = value.status() {
            DateVoteError::Network(format!(
                "notification endpoint answered HTTP {}",
                status.as_u16()
            ))
        } else if value.is_builder() {
            DateVoteError::Config(format!("invalid notification request: {value}"))
        } else if value.is_connect() {
            DateVoteError::Network("notification endpoint unreachable".into())
        } else {
            DateVoteError::Network(value.to_string())
        };
        InfraError(mapped)
    }
}
