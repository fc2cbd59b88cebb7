mod support;

use std::sync::Arc;

use chrono::Duration;
use datevote_common::testing::MockClock;
use datevote_core::voting::window::{default_window, evaluate};
use datevote_core::VotingWindowClock;
use datevote_domain::constants::VOTING_CLOSED_MESSAGE;
use datevote_domain::VotingWindowState;
use support::fixtures::{game_night, t0};

#[test]
fn countdown_strictly_decreases_while_open() {
    let mut previous = i64::MAX;
    for step in 0..48 {
        let now = t0() + Duration::hours(step) + Duration::minutes(17);
        match evaluate(Some(t0()), now, default_window()) {
            Some(VotingWindowState::Open { remaining }) => {
                assert!(remaining.total_seconds() < previous);
                previous = remaining.total_seconds();
            }
            other => panic!("expected open at step {step}, got {other:?}"),
        }
    }
}

#[test]
fn closed_one_second_after_deadline() {
    let mock = MockClock::at(t0() + Duration::hours(48) + Duration::seconds(1));
    let clock = VotingWindowClock::for_poll(&game_night(), default_window(), Arc::new(mock));

    assert_eq!(clock.state(), Some(VotingWindowState::Closed));
    assert_eq!(clock.display_text().as_deref(), Some(VOTING_CLOSED_MESSAGE));
    assert!(!clock.submission_allowed());
}

#[test]
fn display_text_tracks_the_mock_clock() {
    let mock = MockClock::at(t0());
    let clock = VotingWindowClock::for_poll(&game_night(), default_window(), Arc::new(mock.clone()));

    assert_eq!(clock.display_text().as_deref(), Some("48h 0m 0s left to vote"));

    mock.advance(Duration::hours(47) + Duration::minutes(59) + Duration::seconds(59));
    assert_eq!(clock.display_text().as_deref(), Some("0h 0m 1s left to vote"));
    assert!(clock.submission_allowed());

    mock.advance(Duration::seconds(1));
    assert_eq!(clock.display_text().as_deref(), Some(VOTING_CLOSED_MESSAGE));
    assert_eq!(clock.deadline(), Some(t0() + Duration::hours(48)));
}
