//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file into the process environment when one exists
//! 2. Attempts to load from environment variables
//! 3. Only if a required variable is missing, falls back to a config file
//! 4. If no config file exists either, uses the built-in defaults
//!
//! ## Environment Variables
//! Required:
//! - `DATEVOTE_SITE_BASE_URL`: Scheme and host used in share links
//! - `DATEVOTE_NOTIFY_ENDPOINT`: Scheme and host of the notification service
//!
//! Optional (defaults in parentheses):
//! - `DATEVOTE_PREVIEW_IMAGE_URL`: Link preview image
//! - `DATEVOTE_NOTIFY_PATH` (`/api/notify`)
//! - `DATEVOTE_NOTIFY_TIMEOUT`: Seconds (10)
//! - `DATEVOTE_DB_PATH` (`datevote.db`)
//! - `DATEVOTE_DB_POOL_SIZE` (4)
//! - `DATEVOTE_VOTING_WINDOW_HOURS` (48)
//! - `DATEVOTE_VOTING_TICK_MS` (1000)
//! - `DATEVOTE_FAILURE_REPORTING`: `distinct` or `collapsed` (`distinct`)
//! - `DATEVOTE_PERSIST_TIMEOUT`: Seconds (10)
//! - `DATEVOTE_LOG_LEVEL` (`info`)
//! - `DATEVOTE_LOG_JSON`: Boolean (false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./datevote.json` or `./datevote.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use datevote_domain::constants::MAX_VOTING_WINDOW_HOURS;
use datevote_domain::{
    Config, DateVoteError, FailureReporting, LoggingConfig, NotificationConfig, Result,
    SiteConfig, StorageConfig, SubmissionConfig, VotingConfig,
};
use url::Url;

const REQUIRED_ENV: [&str; 2] = ["DATEVOTE_SITE_BASE_URL", "DATEVOTE_NOTIFY_ENDPOINT"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `DateVoteError::Config` if a source is present but invalid.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Failed to read .env file"),
    }

    if env_configured() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    tracing::debug!("Required environment variables not set, trying file");
    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration source found; using defaults");
            Ok(Config::default())
        }
    }
}

/// Both required variables are present.
fn env_configured() -> bool {
    REQUIRED_ENV.iter().all(|key| std::env::var_os(key).is_some())
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `DateVoteError::Config` if a required variable is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let site_defaults = SiteConfig::default();
    let notification_defaults = NotificationConfig::default();
    let storage_defaults = StorageConfig::default();
    let voting_defaults = VotingConfig::default();
    let submission_defaults = SubmissionConfig::default();
    let logging_defaults = LoggingConfig::default();

    let config = Config {
        site: SiteConfig {
            base_url: env_var("DATEVOTE_SITE_BASE_URL")?,
            preview_image_url: env_or("DATEVOTE_PREVIEW_IMAGE_URL", site_defaults.preview_image_url),
        },
        notification: NotificationConfig {
            endpoint_base: env_var("DATEVOTE_NOTIFY_ENDPOINT")?,
            path: env_or("DATEVOTE_NOTIFY_PATH", notification_defaults.path),
            timeout_seconds: env_parse("DATEVOTE_NOTIFY_TIMEOUT", notification_defaults.timeout_seconds)?,
        },
        storage: StorageConfig {
            path: env_or("DATEVOTE_DB_PATH", storage_defaults.path),
            pool_size: env_parse("DATEVOTE_DB_POOL_SIZE", storage_defaults.pool_size)?,
        },
        voting: VotingConfig {
            window_hours: env_parse("DATEVOTE_VOTING_WINDOW_HOURS", voting_defaults.window_hours)?,
            tick_millis: env_parse("DATEVOTE_VOTING_TICK_MS", voting_defaults.tick_millis)?,
        },
        submission: SubmissionConfig {
            failure_reporting: env_parse::<FailureReporting>(
                "DATEVOTE_FAILURE_REPORTING",
                submission_defaults.failure_reporting,
            )?,
            persist_timeout_seconds: env_parse(
                "DATEVOTE_PERSIST_TIMEOUT",
                submission_defaults.persist_timeout_seconds,
            )?,
        },
        logging: LoggingConfig {
            level: env_or("DATEVOTE_LOG_LEVEL", logging_defaults.level),
            json: env_bool("DATEVOTE_LOG_JSON", logging_defaults.json),
        },
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DateVoteError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DateVoteError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DateVoteError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DateVoteError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DateVoteError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DateVoteError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DateVoteError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject values that would only fail later, at share or submit time.
/// Check URLs, paths, the window length and timeouts.
///
/// # Errors
/// Returns `DateVoteError::Config` naming the first offending setting.
pub fn validate(config: &Config) -> Result<()> {
    for (name, value) in [
        ("site.base_url", &config.site.base_url),
        ("notification.endpoint_base", &config.notification.endpoint_base),
    ] {
        let parsed = Url::parse(value)
            .map_err(|e| DateVoteError::Config(format!("Invalid {name} '{value}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DateVoteError::Config(format!("{name} must be an http(s) URL")));
        }
    }

    if !config.notification.path.starts_with('/') {
        return Err(DateVoteError::Config("notification.path must start with '/'".into()));
    }
    if !(1..=MAX_VOTING_WINDOW_HOURS).contains(&config.voting.window_hours) {
        return Err(DateVoteError::Config(format!(
            "voting.window_hours must be between 1 and {MAX_VOTING_WINDOW_HOURS}"
        )));
    }
    for (name, seconds) in [
        ("notification.timeout_seconds", config.notification.timeout_seconds),
        ("submission.persist_timeout_seconds", config.submission.persist_timeout_seconds),
    ] {
        if seconds == 0 {
            return Err(DateVoteError::Config(format!("{name} must be at least 1")));
        }
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("datevote.json"),
        dir.join("datevote.toml"),
    ]
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DateVoteError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| DateVoteError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
