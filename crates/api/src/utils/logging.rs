use std::time::Duration;

use datevote_domain::{DateVoteError, LoggingConfig, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.level` when set. Fails if a subscriber is
/// already installed or the directive does not parse.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|err| DateVoteError::Config(format!("Invalid log filter: {err}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|err| DateVoteError::Internal(format!("Failed to install subscriber: {err}")))
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a stable identifier such as `"poll_view::submit"`; never
/// pass voter-entered text.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `DateVoteError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &DateVoteError) -> &'static str {
    match error {
        DateVoteError::NotFound(_) => "not_found",
        DateVoteError::Validation(_) => "validation",
        DateVoteError::SubmissionFailed(_) => "submission_failed",
        DateVoteError::Database(_) => "database",
        DateVoteError::Network(_) => "network",
        DateVoteError::Config(_) => "config",
        DateVoteError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use datevote_domain::ValidationFailure;

    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&DateVoteError::NotFound("poll".into())), "not_found");
        assert_eq!(error_label(&ValidationFailure::InvalidEmail.into()), "validation");
        assert_eq!(error_label(&DateVoteError::SubmissionFailed("x".into())), "submission_failed");
    }

    #[test]
    fn invalid_level_is_a_config_error() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig { level: "datevote=verbose".into(), json: false };
        assert!(matches!(init_tracing(&config), Err(DateVoteError::Config(_))));
    }
}
