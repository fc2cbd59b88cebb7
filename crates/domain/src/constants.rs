//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Voting window
pub const VOTING_WINDOW_HOURS: i64 = 48;
pub const MAX_VOTING_WINDOW_HOURS: i64 = 24 * 366;
pub const COUNTDOWN_TICK_MS: u64 = 1000;
pub const VOTING_CLOSED_MESSAGE: &str = "Voting has closed";
pub const COUNTDOWN_SUFFIX: &str = "left to vote";

// Poll field fallbacks
pub const DEFAULT_EVENT_TITLE: &str = "an event";
pub const DEFAULT_LOCATION: &str = "somewhere";
pub const DEFAULT_ORGANISER_NAME: &str = "Someone";

// Routes
pub const POLL_PATH_PREFIX: &str = "/poll";
pub const RESULTS_PATH_PREFIX: &str = "/results";
pub const NOTIFY_PATH: &str = "/api/notify";

// Share payloads
pub const DEFAULT_SITE_BASE_URL: &str = "https://datevote.app";
pub const WHATSAPP_SEND_URL: &str = "https://wa.me/";
pub const EMAIL_SIGN_OFF: &str = "Hope to see you there!";
pub const DEFAULT_PREVIEW_IMAGE_URL: &str = "https://datevote.app/og-image.png";

// User-facing submission messages
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Sorry, your vote could not be saved. Please try again.";
pub const NOTIFY_FAILED_MESSAGE: &str =
    "Your vote was saved, but the organiser could not be notified.";
