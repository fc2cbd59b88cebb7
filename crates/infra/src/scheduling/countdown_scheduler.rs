//! Voting countdown scheduler.
//!
//! Re-evaluates a [`VotingWindowClock`] on a fixed cadence and publishes the
//! result on a `watch` channel. The task exits by itself once the window has
//! closed; otherwise it runs until `stop` is called or the scheduler is
//! dropped.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use datevote_common::time::SystemClock;
//! use datevote_core::voting::window::default_window;
//! use datevote_core::VotingWindowClock;
//! use datevote_infra::scheduling::{CountdownScheduler, CountdownSchedulerConfig, SchedulerResult};
//!
//! # async fn example() -> SchedulerResult<()> {
//! let window = Arc::new(VotingWindowClock::new(None, default_window(), Arc::new(SystemClock)));
//! let mut scheduler = CountdownScheduler::new(window, CountdownSchedulerConfig::default());
//! let updates = scheduler.subscribe();
//!
//! scheduler.start().await?;
//! let _text = updates.borrow().map(|state| state.display_text());
//! scheduler.stop().await.ok();
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use datevote_core::VotingWindowClock;
use datevote_domain::{VotingConfig, VotingWindowState};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};

type StateSender = Arc<watch::Sender<Option<VotingWindowState>>>;

/// Configuration for the countdown scheduler
#[derive(Debug, Clone)]
pub struct CountdownSchedulerConfig {
    /// Re-evaluation cadence
    pub tick: Duration,
    /// Timeout for awaiting the task join handle on stop
    pub join_timeout: Duration,
}

impl Default for CountdownSchedulerConfig {
    fn default() -> Self {
        Self { tick: Duration::from_secs(1), join_timeout: Duration::from_secs(5) }
    }
}

impl From<&VotingConfig> for CountdownSchedulerConfig {
    fn from(config: &VotingConfig) -> Self {
        Self { tick: Duration::from_millis(config.tick_millis.max(1)), ..Self::default() }
    }
}

/// Countdown scheduler with explicit lifecycle management.
pub struct CountdownScheduler {
    window: Arc<VotingWindowClock>,
    config: CountdownSchedulerConfig,
    cancellation_token: CancellationToken,
    task_handle: Option<JoinHandle<()>>,
    state: StateSender,
}

impl CountdownScheduler {
    /// Create a scheduler; the initial state is evaluated immediately.
    pub fn new(window: Arc<VotingWindowClock>, config: CountdownSchedulerConfig) -> Self {
        let (sender, _) = watch::channel(window.state());
        Self {
            window,
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: None,
            state: Arc::new(sender),
        }
    }

    /// Receive every published state change.
    pub fn subscribe(&self) -> watch::Receiver<Option<VotingWindowState>> {
        self.state.subscribe()
    }

    /// Most recently published state. `None` when the poll has no deadline.
    pub fn current(&self) -> Option<VotingWindowState> {
        *self.state.borrow()
    }

    /// Start ticking.
    ///
    /// Does not spawn anything when the poll has no deadline or the window is
    /// already closed.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        let initial = self.window.state();
        publish(&self.state, initial);
        match initial {
            None => {
                debug!("poll has no deadline; countdown not started");
                return Ok(());
            }
            Some(VotingWindowState::Closed) => {
                debug!("voting already closed; countdown not started");
                return Ok(());
            }
            Some(VotingWindowState::Open { .. }) => {}
        }

        // Fresh token so the scheduler can be restarted after stop
        self.cancellation_token = CancellationToken::new();

        let window = Arc::clone(&self.window);
        let state = Arc::clone(&self.state);
        let tick = self.config.tick;
        let cancel = self.cancellation_token.clone();

        self.task_handle = Some(tokio::spawn(async move {
            Self::tick_loop(window, state, tick, cancel).await;
        }));

        info!(tick_ms = tick.as_millis() as u64, "countdown scheduler started");
        Ok(())
    }

    /// Cancel the task and wait for it to finish.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.take() {
            let join_timeout = self.config.join_timeout;
            tokio::time::timeout(join_timeout, handle)
                .await
                .map_err(|_| SchedulerError::Timeout { seconds: join_timeout.as_secs() })??;
        }

        info!("countdown scheduler stopped");
        Ok(())
    }

    /// Returns true while the tick task is active.
    pub fn is_running(&self) -> bool {
        self.task_handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    async fn tick_loop(
        window: Arc<VotingWindowClock>,
        state: StateSender,
        tick: Duration,
        cancel: CancellationToken,
    ) {
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("countdown loop cancelled");
                    break;
                }
                _ = interval.tick() => {
                    let next = window.state();
                    publish(&state, next);

                    if matches!(next, Some(VotingWindowState::Closed) | None) {
                        info!("voting window closed; countdown finished");
                        break;
                    }
                }
            }
        }
    }
}

/// Notify receivers only when the state actually changed.
fn publish(sender: &watch::Sender<Option<VotingWindowState>>, next: Option<VotingWindowState>) {
    sender.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
}

impl Drop for CountdownScheduler {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("CountdownScheduler dropped while running; cancelling task");
        }
        self.cancellation_token.cancel();
    }
}
