//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    COUNTDOWN_TICK_MS, DEFAULT_PREVIEW_IMAGE_URL, DEFAULT_SITE_BASE_URL, NOTIFY_PATH,
    VOTING_WINDOW_HOURS,
};
use crate::impl_text_conversions;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub voting: VotingConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Public site configuration used for share links and previews
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host of the canonical poll URL, without trailing slash.
    pub base_url: String,
    pub preview_image_url: String,
}

/// Organiser notification endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub endpoint_base: String,
    pub path: String,
    pub timeout_seconds: u64,
}

/// Poll/vote storage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub pool_size: u32,
}

/// Voting window parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VotingConfig {
    pub window_hours: i64,
    pub tick_millis: u64,
}

/// How a failed notification after a successful save is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureReporting {
    /// Report "saved, organiser not notified" separately from save failures.
    #[default]
    Distinct,
    /// Report every failure as a generic save failure, without navigating.
    Collapsed,
}

impl_text_conversions!(FailureReporting {
    Distinct => "distinct",
    Collapsed => "collapsed",
});

/// Submission pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub failure_reporting: FailureReporting,
    pub persist_timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SITE_BASE_URL.to_string(),
            preview_image_url: DEFAULT_PREVIEW_IMAGE_URL.to_string(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            endpoint_base: DEFAULT_SITE_BASE_URL.to_string(),
            path: NOTIFY_PATH.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: "datevote.db".to_string(), pool_size: 4 }
    }
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self { window_hours: VOTING_WINDOW_HOURS, tick_millis: COUNTDOWN_TICK_MS }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self { failure_reporting: FailureReporting::default(), persist_timeout_seconds: 10 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            notification: NotificationConfig::default(),
            storage: StorageConfig::default(),
            voting: VotingConfig::default(),
            submission: SubmissionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
