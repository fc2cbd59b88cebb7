#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use datevote_common::testing::MockClock;
use datevote_domain::{
    Config, FailureReporting, NotificationConfig, Poll, PollId, SiteConfig, StorageConfig,
};
use datevote_lib::{AppContext, ViewEffect, ViewEffects};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SITE: &str = "https://votes.test";

/// Application context over a temporary database and a mock notify endpoint.
pub struct TestApp {
    pub ctx: AppContext,
    pub clock: MockClock,
    pub server: MockServer,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Context whose notify endpoint answers with `status`.
    pub async fn new(status: u16, policy: FailureReporting) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/notify"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("temp dir should be created");
        let mut config = Config {
            site: SiteConfig { base_url: SITE.into(), ..SiteConfig::default() },
            notification: NotificationConfig {
                endpoint_base: server.uri(),
                path: "/api/notify".into(),
                timeout_seconds: 2,
            },
            storage: StorageConfig {
                path: temp_dir.path().join("datevote.db").to_string_lossy().into_owned(),
                pool_size: 2,
            },
            ..Config::default()
        };
        config.submission.failure_reporting = policy;

        let clock = MockClock::at(t0());
        let ctx = AppContext::new_with_clock(config, Arc::new(clock.clone()))
            .expect("context should initialise");

        Self { ctx, clock, server, _temp_dir: temp_dir }
    }

    pub async fn seed(&self, poll: &Poll) {
        self.ctx.polls.insert_poll(poll).await.expect("poll should be stored");
    }

    pub async fn stored_votes(&self, id: &str) -> usize {
        self.ctx.polls.list_votes(&PollId::new(id)).await.expect("votes listed").len()
    }

    pub async fn notify_requests(&self) -> usize {
        self.server.received_requests().await.map(|r| r.len()).unwrap_or_default()
    }

    /// Move "now" to `offset` after the fixture poll's creation instant.
    pub fn at_offset(&self, offset: Duration) {
        self.clock.set(t0() + offset);
    }
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap()
}

pub fn poll_dates() -> Vec<NaiveDate> {
    vec![
        NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 7).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
    ]
}

pub fn game_night() -> Poll {
    Poll::new("abc123", poll_dates())
        .with_event_title("Game Night")
        .with_location("Leeds")
        .with_organiser("Sam", "sam@example.com")
        .with_created_at(t0())
}

/// Effects emitted so far, without waiting.
pub fn drain(effects: &mut ViewEffects) -> Vec<ViewEffect> {
    let mut drained = Vec::new();
    while let Ok(effect) = effects.try_recv() {
        drained.push(effect);
    }
    drained
}
