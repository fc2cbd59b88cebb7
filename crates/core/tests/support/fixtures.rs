use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use datevote_domain::{Availability, DraftVote, Poll};

/// Creation instant used by every fixture poll.
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

/// Game night in Leeds, organised by Sam, created at [`t0`].
pub fn game_night() -> Poll {
    Poll::new("abc123", poll_dates())
        .with_event_title("Game Night")
        .with_location("Leeds")
        .with_organiser("Sam", "sam@example.com")
        .with_created_at(t0())
}

/// A draft answering every date of [`game_night`].
pub fn complete_draft(name: &str) -> DraftVote {
    let dates = poll_dates();
    DraftVote::new(name)
        .with_response(dates[0], Availability::Yes)
        .with_response(dates[1], Availability::Maybe)
        .with_response(dates[2], Availability::No)
}
