//! Integration tests for AppContext lifecycle

use std::sync::Arc;

use datevote_domain::{Config, DateVoteError, FailureReporting, StorageConfig};
use datevote_lib::context::AppContext;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    Config {
        storage: StorageConfig {
            path: dir.path().join("datevote.db").to_string_lossy().into_owned(),
            pool_size: 2,
        },
        ..Config::default()
    }
}

#[tokio::test]
async fn context_creation_runs_migrations() {
    let dir = TempDir::new().unwrap();
    let ctx = AppContext::new_with_config(config_in(&dir)).expect("context should initialise");

    assert_eq!(ctx.db.schema_version().unwrap(), Some(1));
    ctx.health_check().expect("storage should be healthy");
    assert_eq!(ctx.voting_window(), chrono::Duration::hours(48));
}

#[tokio::test]
async fn reopening_an_existing_database_is_idempotent() {
    let dir = TempDir::new().unwrap();
    drop(AppContext::new_with_config(config_in(&dir)).unwrap());

    let ctx = AppContext::new_with_config(config_in(&dir)).expect("second open should succeed");
    assert_eq!(ctx.db.schema_version().unwrap(), Some(1));
}

#[tokio::test]
async fn submission_service_follows_configured_policy() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.submission.failure_reporting = FailureReporting::Collapsed;
    let ctx = AppContext::new_with_config(config).unwrap();

    struct Ignore;
    impl datevote_core::Navigator for Ignore {
        fn navigate(&self, _path: &str) {}
    }

    let service = ctx.submission_service(Arc::new(Ignore));
    assert_eq!(service.failure_reporting(), FailureReporting::Collapsed);
}

#[tokio::test]
async fn invalid_notification_endpoint_fails_fast() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.notification.endpoint_base = "not a url".into();

    let err = AppContext::new_with_config(config).err().expect("context should fail");
    assert!(matches!(err, DateVoteError::Config(_)));
}

#[tokio::test]
async fn oversized_voting_window_fails_fast() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    config.voting.window_hours = 10_000_000_000;

    let err = AppContext::new_with_config(config).err().expect("context should fail");
    assert!(matches!(err, DateVoteError::Config(msg) if msg.contains("voting.window_hours")));
}
