//! Poll voting view commands
//!
//! `PollView` owns one session's draft vote and countdown. Side effects the
//! host must perform (navigation, clipboard, opening URLs, alerts) are
//! emitted as [`ViewEffect`]s on an unbounded channel handed out by
//! [`PollView::open`].

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use datevote_core::submission::ports::Navigator;
use datevote_core::{ShareLinkComposer, VoteSubmissionService, VotingWindowClock};
use datevote_domain::constants::{NOTIFY_FAILED_MESSAGE, VOTING_CLOSED_MESSAGE};
use datevote_domain::{
    Availability, DateVoteError, DraftVote, LinkPreview, Poll, PollId, Result, ShareAction,
    ShareChannel, SubmissionOutcome, VotingWindowState,
};
use datevote_infra::scheduling::SchedulerError;
use datevote_infra::{CountdownScheduler, CountdownSchedulerConfig};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Side effect requested by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", content = "value", rename_all = "snake_case")]
pub enum ViewEffect {
    /// Replace the current page with this path.
    Navigate(String),
    CopyToClipboard(String),
    /// Open a URL in a new window or external app.
    OpenExternal(String),
    /// Blocking prompt text.
    Alert(String),
}

/// Receiving half of a view's effect channel.
pub type ViewEffects = mpsc::UnboundedReceiver<ViewEffect>;

/// [`Navigator`] that forwards to the host through the effect channel.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    effects: mpsc::UnboundedSender<ViewEffect>,
}

impl ChannelNavigator {
    pub fn new(effects: mpsc::UnboundedSender<ViewEffect>) -> Self {
        Self { effects }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, path: &str) {
        emit(&self.effects, ViewEffect::Navigate(path.to_string()));
    }
}

/// Host-side effects are fire-and-forget; a closed receiver is not an error.
fn emit(effects: &mpsc::UnboundedSender<ViewEffect>, effect: ViewEffect) {
    if effects.send(effect).is_err() {
        debug!("view effect dropped; host receiver closed");
    }
}

/// One voter's session on one poll.
pub struct PollView {
    poll: Poll,
    draft: DraftVote,
    window: Arc<VotingWindowClock>,
    countdown: CountdownScheduler,
    service: VoteSubmissionService,
    composer: ShareLinkComposer,
    effects: mpsc::UnboundedSender<ViewEffect>,
}

impl PollView {
    /// Load the poll and start its countdown.
    ///
    /// Returns `NotFound` when the id has no record.
    #[instrument(skip(ctx), fields(poll_id = %id))]
    pub async fn open(ctx: &AppContext, id: &str) -> Result<(Self, ViewEffects)> {
        let command = "poll_view::open";
        let start = Instant::now();

        let result = Self::load(ctx, &PollId::new(id)).await;
        log_command_execution(command, start.elapsed(), result.is_ok());
        if let Err(err) = &result {
            warn!(command, error_type = error_label(err), "failed to open poll");
        }
        result
    }

    async fn load(ctx: &AppContext, id: &PollId) -> Result<(Self, ViewEffects)> {
        let poll = ctx
            .polls
            .find_poll(id)
            .await?
            .ok_or_else(|| DateVoteError::NotFound(format!("poll {id}")))?;

        let (effects, receiver) = mpsc::unbounded_channel();
        let navigator = Arc::new(ChannelNavigator::new(effects.clone()));

        let window =
            Arc::new(VotingWindowClock::for_poll(&poll, ctx.voting_window(), Arc::clone(&ctx.clock)));
        let mut countdown = CountdownScheduler::new(
            Arc::clone(&window),
            CountdownSchedulerConfig::from(&ctx.config.voting),
        );
        countdown.start().await.map_err(DateVoteError::from)?;

        info!(dates = poll.dates.len(), has_deadline = window.has_deadline(), "poll view opened");

        let view = Self {
            poll,
            draft: DraftVote::default(),
            window,
            countdown,
            service: ctx.submission_service(navigator),
            composer: ctx.composer.clone(),
            effects,
        };
        Ok((view, receiver))
    }

    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    pub fn draft(&self) -> &DraftVote {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into();
    }

    /// Record an answer for one of the poll's dates.
    ///
    /// Returns false, leaving the draft untouched, for a date the poll does
    /// not ask about.
    pub fn set_response(&mut self, date: NaiveDate, availability: Availability) -> bool {
        if !self.poll.dates.contains(&date) {
            warn!(%date, "ignoring response for a date outside the poll");
            return false;
        }
        self.draft.set_response(date, availability);
        true
    }

    /// Poll dates still missing an answer, in display order.
    pub fn missing_dates(&self) -> Vec<NaiveDate> {
        self.draft.unanswered(&self.poll.dates).into_iter().copied().collect()
    }

    /// Whether the submit affordance should be shown.
    pub fn can_submit(&self) -> bool {
        self.window.submission_allowed()
    }

    /// Countdown updates; `None` when the poll has no deadline.
    pub fn countdown(&self) -> watch::Receiver<Option<VotingWindowState>> {
        self.countdown.subscribe()
    }

    /// Current countdown or closed text; `None` when the poll has no deadline.
    pub fn countdown_text(&self) -> Option<String> {
        self.window.display_text()
    }

    /// Validate and submit the draft.
    ///
    /// Every failure is also surfaced to the voter as an [`ViewEffect::Alert`].
    /// A vote that was saved but not announced to the organiser alerts
    /// without failing; navigation has already been requested by then.
    #[instrument(skip(self), fields(poll_id = %self.poll.id))]
    pub async fn submit(&self) -> Result<SubmissionOutcome> {
        let command = "poll_view::submit";
        let start = Instant::now();

        if !self.can_submit() {
            self.alert(VOTING_CLOSED_MESSAGE.to_string());
            log_command_execution(command, start.elapsed(), false);
            return Err(DateVoteError::SubmissionFailed(VOTING_CLOSED_MESSAGE.to_string()));
        }

        let result = self.service.submit(&self.poll, &self.draft).await;
        match &result {
            Ok(SubmissionOutcome::PersistedNotifyFailed { .. }) => {
                self.alert(NOTIFY_FAILED_MESSAGE.to_string());
            }
            Ok(_) => {}
            Err(err) => {
                debug!(error_type = error_label(err), "submission rejected");
                self.alert(err.user_message());
            }
        }

        log_command_execution(command, start.elapsed(), result.is_ok());
        result
    }

    /// Copy the poll link and open the channel's share target.
    ///
    /// Unknown channel tags behave like `copy`.
    #[instrument(skip(self), fields(poll_id = %self.poll.id))]
    pub fn share(&self, channel: &str) -> ShareAction {
        let channel = ShareChannel::from_tag(channel);
        let action = self.composer.action(&self.poll, channel);

        emit(&self.effects, ViewEffect::CopyToClipboard(action.clipboard_text.clone()));
        emit(&self.effects, ViewEffect::OpenExternal(action.open_url.clone()));

        info!(%channel, "poll shared");
        action
    }

    /// Canonical link to this poll.
    pub fn poll_url(&self) -> String {
        self.composer.poll_url(&self.poll.id)
    }

    /// Link-unfurl metadata for the poll page.
    pub fn preview_metadata(&self) -> LinkPreview {
        self.composer.link_preview(&self.poll)
    }

    pub fn results_path(&self) -> String {
        self.poll.results_path()
    }

    /// Tear the view down, stopping the countdown.
    pub async fn close(mut self) -> Result<()> {
        match self.countdown.stop().await {
            Ok(()) | Err(SchedulerError::NotRunning) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn alert(&self, message: String) {
        emit(&self.effects, ViewEffect::Alert(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_serialize_with_tag_and_value() {
        let json = serde_json::to_value(ViewEffect::Navigate("/results/abc123".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "effect": "navigate", "value": "/results/abc123" }));

        let json = serde_json::to_value(ViewEffect::CopyToClipboard("x".into())).unwrap();
        assert_eq!(json["effect"], "copy_to_clipboard");
    }

    #[test]
    fn navigator_survives_closed_receiver() {
        let (sender, receiver) = mpsc::unbounded_channel();
        drop(receiver);
        ChannelNavigator::new(sender).navigate("/results/abc123");
    }

    #[tokio::test]
    async fn navigator_forwards_paths() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        ChannelNavigator::new(sender).navigate("/results/abc123");
        assert_eq!(receiver.recv().await, Some(ViewEffect::Navigate("/results/abc123".into())));
    }
}
