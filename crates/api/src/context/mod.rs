//! Application context - dependency injection container

use std::sync::Arc;

use datevote_common::time::{Clock, SystemClock};
use datevote_core::submission::ports::{Navigator, NotificationDispatcher, PollRepository};
use datevote_core::voting::window::default_window;
use datevote_core::{ShareLinkComposer, VoteSubmissionService};
use datevote_domain::{Config, Result};
use datevote_infra::{config, DbManager, HttpNotificationDispatcher, SqlitePollRepository};
use tracing::{debug, info, instrument};

/// Application context - holds shared services and dependencies.
///
/// One context serves every poll view opened by the host. Per-view state
/// (draft vote, countdown task, effect channel) lives in
/// [`crate::commands::PollView`].
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub polls: Arc<dyn PollRepository>,
    pub notifier: Arc<dyn NotificationDispatcher>,
    pub composer: ShareLinkComposer,
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    /// Create a context from the environment / config file.
    pub fn new() -> Result<Self> {
        Self::new_with_config(config::load()?)
    }

    /// Create a context with an explicit configuration and the system clock.
    pub fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_clock(config, Arc::new(SystemClock))
    }

    /// Create a context whose vote timestamps and voting windows read `clock`.
    ///
    /// Tests use this to place "now" relative to a poll's creation instant.
    #[instrument(skip_all, fields(db_path = %config.storage.path))]
    pub fn new_with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        config::validate(&config)?;
        let db = Arc::new(DbManager::from_config(&config.storage)?);
        db.run_migrations()?;

        let polls: Arc<dyn PollRepository> =
            Arc::new(SqlitePollRepository::with_clock(Arc::clone(&db), Arc::clone(&clock)));
        let notifier: Arc<dyn NotificationDispatcher> =
            Arc::new(HttpNotificationDispatcher::from_config(&config.notification)?);
        let composer = ShareLinkComposer::from_site(&config.site);

        info!(
            policy = %config.submission.failure_reporting,
            window_hours = config.voting.window_hours,
            "application context initialised"
        );

        Ok(Self { config, db, polls, notifier, composer, clock })
    }

    /// Submission service bound to one view's navigator.
    pub fn submission_service(&self, navigator: Arc<dyn Navigator>) -> VoteSubmissionService {
        VoteSubmissionService::new(Arc::clone(&self.polls), Arc::clone(&self.notifier), navigator)
            .configured(&self.config.submission, &self.config.notification)
    }

    /// Configured voting window length.
    ///
    /// Falls back to the default length if the configured hours cannot be
    /// represented.
    pub fn voting_window(&self) -> chrono::Duration {
        chrono::Duration::try_hours(self.config.voting.window_hours).unwrap_or_else(default_window)
    }

    /// Verify storage is reachable.
    pub fn health_check(&self) -> Result<()> {
        self.db.health_check()?;
        debug!("storage health check passed");
        Ok(())
    }
}
