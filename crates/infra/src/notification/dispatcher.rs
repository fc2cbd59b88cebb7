//! HTTP implementation of `NotificationDispatcher`
//!
//! Sends one JSON POST per vote. Any transport failure or non-2xx response is
//! reported to the caller; nothing is retried here.

use std::time::Duration;

use async_trait::async_trait;
use datevote_core::submission::ports::NotificationDispatcher;
use datevote_domain::{DateVoteError, NotificationConfig, Result as DomainResult, VoteNotification};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::http::HttpClient;

/// Posts [`VoteNotification`] payloads to `<endpoint_base><path>`.
#[derive(Clone, Debug)]
pub struct HttpNotificationDispatcher {
    client: HttpClient,
    endpoint: Url,
}

impl HttpNotificationDispatcher {
    pub fn new(client: HttpClient, endpoint_base: &str, path: &str) -> DomainResult<Self> {
        let endpoint = Url::parse(endpoint_base)
            .and_then(|base| base.join(path))
            .map_err(|e| DateVoteError::Config(format!("Invalid notification endpoint: {e}")))?;
        Ok(Self { client, endpoint })
    }

    /// Build a dispatcher with its own client, using the configured timeout.
    pub fn from_config(config: &NotificationConfig) -> DomainResult<Self> {
        let client =
            HttpClient::builder().timeout(Duration::from_secs(config.timeout_seconds)).build()?;
        Self::new(client, &config.endpoint_base, &config.path)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl NotificationDispatcher for HttpNotificationDispatcher {
    #[instrument(skip(self, notification), fields(poll_id = %notification.poll_id))]
    async fn notify(&self, notification: &VoteNotification) -> DomainResult<()> {
        match self.client.post_json(self.endpoint.as_str(), notification).await {
            Ok(response) => {
                debug!(status = %response.status(), "notification accepted");
                Ok(())
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, error = %err, "notification rejected");
                Err(err)
            }
        }
    }
}
