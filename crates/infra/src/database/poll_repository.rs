//! Poll and vote persistence on SQLite
//!
//! Dates and responses are stored as JSON text columns; timestamps use the
//! rusqlite chrono mapping (RFC 3339 text).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use datevote_common::time::{Clock, SystemClock};
use datevote_core::submission::ports::PollRepository;
use datevote_domain::{
    DateVoteError, DraftVote, PersistedVote, Poll, PollId, Responses, Result as DomainResult,
};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

/// SQLite-backed implementation of `PollRepository`
pub struct SqlitePollRepository {
    db: Arc<DbManager>,
    clock: Arc<dyn Clock>,
}

impl SqlitePollRepository {
    /// Create a repository that stamps votes with the system clock
    pub fn new(db: Arc<DbManager>) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    pub fn with_clock(db: Arc<DbManager>, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }
}

#[async_trait]
impl PollRepository for SqlitePollRepository {
    #[instrument(skip(self), fields(poll_id = %id))]
    async fn find_poll(&self, id: &PollId) -> DomainResult<Option<Poll>> {
        let db = Arc::clone(&self.db);
        let id = id.clone();

        task::spawn_blocking(move || -> DomainResult<Option<Poll>> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT id, event_title, location, organiser_first_name, organiser_email,
                        dates, created_at
                 FROM polls WHERE id = ?1",
                params![id.as_str()],
                map_poll_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self, draft), fields(poll_id = %poll_id))]
    async fn append_vote(&self, poll_id: &PollId, draft: &DraftVote) -> DomainResult<PersistedVote> {
        let db = Arc::clone(&self.db);
        let vote = PersistedVote::from_draft(poll_id.clone(), draft, self.clock.now());

        task::spawn_blocking(move || -> DomainResult<PersistedVote> {
            let responses = serde_json::to_string(&vote.responses)
                .map_err(|err| DateVoteError::from(InfraError::from(err)))?;

            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO votes (id, poll_id, name, email, responses, message, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    vote.id.to_string(),
                    vote.poll_id.as_str(),
                    vote.name,
                    vote.email,
                    responses,
                    vote.message,
                    vote.created_at,
                ],
            )
            .map_err(map_sql_error)?;

            debug!(vote_id = %vote.id, "vote row inserted");
            Ok(vote)
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self, poll), fields(poll_id = %poll.id))]
    async fn insert_poll(&self, poll: &Poll) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let poll = poll.clone();

        task::spawn_blocking(move || -> DomainResult<()> {
            let dates = serde_json::to_string(&poll.dates)
                .map_err(|err| DateVoteError::from(InfraError::from(err)))?;

            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO polls (id, event_title, location, organiser_first_name,
                                    organiser_email, dates, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    poll.id.as_str(),
                    poll.event_title,
                    poll.location,
                    poll.organiser_first_name,
                    poll.organiser_email,
                    dates,
                    poll.created_at,
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self), fields(poll_id = %poll_id))]
    async fn list_votes(&self, poll_id: &PollId) -> DomainResult<Vec<PersistedVote>> {
        let db = Arc::clone(&self.db);
        let poll_id = poll_id.clone();

        task::spawn_blocking(move || -> DomainResult<Vec<PersistedVote>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(
                    "SELECT id, poll_id, name, email, responses, message, created_at
                     FROM votes WHERE poll_id = ?1
                     ORDER BY created_at ASC, rowid ASC",
                )
                .map_err(map_sql_error)?;

            let rows = stmt.query_map(params![poll_id.as_str()], map_vote_row).map_err(map_sql_error)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_poll_row(row: &Row<'_>) -> rusqlite::Result<Poll> {
    let dates: Vec<NaiveDate> = json_column(row, 5)?;
    Ok(Poll {
        id: PollId::new(row.get::<_, String>(0)?),
        event_title: row.get(1)?,
        location: row.get(2)?,
        organiser_first_name: row.get(3)?,
        organiser_email: row.get(4)?,
        dates,
        created_at: row.get::<_, Option<DateTime<Utc>>>(6)?,
    })
}

fn map_vote_row(row: &Row<'_>) -> rusqlite::Result<PersistedVote> {
    let raw_id: String = row.get(0)?;
    let id = Uuid::parse_str(&raw_id)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err)))?;
    let responses: Responses = json_column(row, 4)?;

    Ok(PersistedVote {
        id,
        poll_id: PollId::new(row.get::<_, String>(1)?),
        name: row.get(2)?,
        email: row.get(3)?,
        responses,
        message: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn json_column<T: serde::de::DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn map_join_error(err: task::JoinError) -> DateVoteError {
    DateVoteError::Internal(format!("Task join error: {err}"))
}
