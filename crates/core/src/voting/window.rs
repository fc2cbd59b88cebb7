//! Voting window evaluation
//!
//! The window is a pure function of the poll's creation instant, the current
//! instant and the window length. Nothing is accumulated between ticks: every
//! reading is recomputed from the absolute deadline, so a late or skipped tick
//! never introduces drift.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use datevote_common::time::Clock;
use datevote_domain::constants::VOTING_WINDOW_HOURS;
use datevote_domain::{Poll, RemainingTime, VotingWindowState};
use tracing::debug;

/// Evaluate the window for a single instant.
///
/// Returns `None` when the poll carries no creation instant, or when the
/// deadline falls outside the representable range: there is no deadline and
/// voting never closes.
pub fn evaluate(
    created_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    window: Duration,
) -> Option<VotingWindowState> {
    let deadline = created_at?.checked_add_signed(window)?;
    if now >= deadline {
        return Some(VotingWindowState::Closed);
    }
    Some(VotingWindowState::Open { remaining: RemainingTime::from_duration(deadline - now) })
}

/// Default window length.
pub fn default_window() -> Duration {
    Duration::hours(VOTING_WINDOW_HOURS)
}

/// Per-poll window clock with a closed latch.
///
/// Once a reading comes back `Closed` every later reading is `Closed` too,
/// even if the underlying clock is moved backwards.
pub struct VotingWindowClock {
    created_at: Option<DateTime<Utc>>,
    window: Duration,
    clock: Arc<dyn Clock>,
    closed: AtomicBool,
}

impl VotingWindowClock {
    pub fn new(created_at: Option<DateTime<Utc>>, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { created_at, window, clock, closed: AtomicBool::new(false) }
    }

    pub fn for_poll(poll: &Poll, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self::new(poll.created_at, window, clock)
    }

    /// `created_at + window`, if the poll has a creation instant and the sum
    /// is representable.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(|created| created.checked_add_signed(self.window))
    }

    /// Whether a countdown applies at all.
    pub fn has_deadline(&self) -> bool {
        self.deadline().is_some()
    }

    /// Current state, or `None` when the poll has no deadline.
    pub fn state(&self) -> Option<VotingWindowState> {
        if self.closed.load(Ordering::Acquire) {
            return Some(VotingWindowState::Closed);
        }

        let state = evaluate(self.created_at, self.clock.now(), self.window)?;
        if state.is_closed() && !self.closed.swap(true, Ordering::AcqRel) {
            debug!(deadline = ?self.deadline(), "voting window closed");
        }
        Some(state)
    }

    /// Countdown or closed text; `None` when there is no deadline.
    pub fn display_text(&self) -> Option<String> {
        self.state().map(|state| state.display_text())
    }

    /// Whether the latch has tripped. Does not read the clock.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Submission is allowed unless the window has closed.
    pub fn submission_allowed(&self) -> bool {
        !matches!(self.state(), Some(VotingWindowState::Closed))
    }
}

impl std::fmt::Debug for VotingWindowClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VotingWindowClock")
            .field("created_at", &self.created_at)
            .field("window", &self.window)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use datevote_common::testing::MockClock;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn open_until_deadline_then_closed() {
        let window = default_window();
        assert!(evaluate(Some(t0()), t0(), window).unwrap().is_open());
        assert!(evaluate(Some(t0()), t0() + window - Duration::seconds(1), window)
            .unwrap()
            .is_open());
        assert!(evaluate(Some(t0()), t0() + window, window).unwrap().is_closed());
    }

    #[test]
    fn remaining_time_floors_to_whole_seconds() {
        let now = t0() + Duration::milliseconds(1_500);
        let state = evaluate(Some(t0()), now, default_window()).unwrap();
        assert_eq!(state.display_text(), "47h 59m 58s left to vote");
    }

    #[test]
    fn absent_creation_instant_has_no_state() {
        assert_eq!(evaluate(None, t0(), default_window()), None);

        let clock = VotingWindowClock::new(None, default_window(), Arc::new(MockClock::at(t0())));
        assert!(!clock.has_deadline());
        assert_eq!(clock.display_text(), None);
        assert!(clock.submission_allowed());
    }

    #[test]
    fn unrepresentable_deadline_means_no_deadline() {
        let far_future = DateTime::<Utc>::MAX_UTC - Duration::hours(1);
        assert_eq!(evaluate(Some(far_future), t0(), default_window()), None);

        let clock =
            VotingWindowClock::new(Some(far_future), default_window(), Arc::new(MockClock::at(t0())));
        assert_eq!(clock.deadline(), None);
        assert!(!clock.has_deadline());
        assert_eq!(clock.state(), None);
        assert!(clock.submission_allowed());
    }

    #[test]
    fn closed_latch_survives_clock_rewind() {
        let mock = MockClock::at(t0() + Duration::hours(49));
        let clock = VotingWindowClock::new(Some(t0()), default_window(), Arc::new(mock.clone()));

        assert_eq!(clock.state(), Some(VotingWindowState::Closed));
        mock.set(t0());
        assert_eq!(clock.state(), Some(VotingWindowState::Closed));
        assert!(clock.is_closed());
        assert!(!clock.submission_allowed());
    }
}
