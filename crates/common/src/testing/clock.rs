//! Mock clock for deterministic testing
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "test-utils")]
//! # {
//! use chrono::{Duration, TimeZone, Utc};
//! use datevote_common::testing::MockClock;
//! use datevote_common::time::Clock;
//!
//! let start = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
//! let clock = MockClock::at(start);
//! clock.advance(Duration::seconds(5));
//! assert_eq!(clock.now() - start, Duration::seconds(5));
//! # }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::time::Clock;

/// Clock whose reading only changes when the test says so.
///
/// Clones share the same reading, so a clone handed to the code under test
/// observes every `advance`/`set` made by the test.
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a mock clock frozen at the current real time.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Create a mock clock frozen at `instant`.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { current: Arc::new(Mutex::new(instant)) }
    }

    /// Move the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock();
        *current += duration;
    }

    /// Jump to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock() = instant;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn clones_share_the_same_reading() {
        let start = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        let clock = MockClock::at(start);
        let observer = clock.clone();

        clock.advance(Duration::hours(48));
        assert_eq!(observer.now(), start + Duration::hours(48));

        clock.set(start);
        assert_eq!(observer.now(), start);
    }
}
