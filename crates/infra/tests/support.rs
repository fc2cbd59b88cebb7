#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use datevote_common::testing::MockClock;
use datevote_domain::{Availability, DraftVote, Poll};
use datevote_infra::database::{DbManager, SqlitePollRepository};
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with migrations applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Repository whose votes are stamped by `clock`.
    pub fn repository(&self, clock: MockClock) -> SqlitePollRepository {
        SqlitePollRepository::with_clock(Arc::clone(&self.manager), Arc::new(clock))
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap()
}

pub fn poll_dates() -> Vec<NaiveDate> {
    vec![NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(), NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()]
}

pub fn game_night() -> Poll {
    Poll::new("abc123", poll_dates())
        .with_event_title("Game Night")
        .with_location("Leeds")
        .with_organiser("Sam", "sam@example.com")
        .with_created_at(t0())
}

pub fn complete_draft(name: &str) -> DraftVote {
    let dates = poll_dates();
    DraftVote::new(name)
        .with_response(dates[0], Availability::Yes)
        .with_response(dates[1], Availability::No)
        .with_message("See you there")
}
