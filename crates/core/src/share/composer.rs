//! Share link and invitation text
//!
//! Everything here is plain string formatting from poll fields; the view layer
//! performs the clipboard and open side effects described by [`ShareAction`].

use datevote_domain::constants::{
    DEFAULT_PREVIEW_IMAGE_URL, DEFAULT_SITE_BASE_URL, EMAIL_SIGN_OFF, POLL_PATH_PREFIX,
    WHATSAPP_SEND_URL,
};
use datevote_domain::{LinkPreview, Poll, PollId, ShareAction, ShareChannel, SiteConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinkComposer {
    base_url: String,
    preview_image_url: String,
}

impl ShareLinkComposer {
    /// `base_url` is scheme and host, e.g. `https://datevote.app`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            preview_image_url: DEFAULT_PREVIEW_IMAGE_URL.to_string(),
        }
    }

    pub fn from_site(site: &SiteConfig) -> Self {
        Self::new(site.base_url.as_str()).with_preview_image(site.preview_image_url.as_str())
    }

    pub fn with_preview_image(mut self, url: impl Into<String>) -> Self {
        self.preview_image_url = url.into();
        self
    }

    /// Canonical `https://<host>/poll/<id>`.
    pub fn poll_url(&self, id: &PollId) -> String {
        format!("{}{}/{}", self.base_url, POLL_PATH_PREFIX, id)
    }

    pub fn share_message(&self, poll: &Poll) -> String {
        format!(
            "{} has invited you to {} in {}. Pick the dates that work for you: {}",
            poll.organiser_name_or_default(),
            poll.event_title_or_default(),
            poll.location_or_default(),
            self.poll_url(&poll.id),
        )
    }

    pub fn email_subject(&self, poll: &Poll) -> String {
        format!(
            "{} invites you to {} in {}",
            poll.organiser_name_or_default(),
            poll.event_title_or_default(),
            poll.location_or_default(),
        )
    }

    pub fn email_body(&self, poll: &Poll) -> String {
        format!("{}\n\n{}", self.share_message(poll), EMAIL_SIGN_OFF)
    }

    pub fn whatsapp_url(&self, poll: &Poll) -> String {
        format!("{}?text={}", WHATSAPP_SEND_URL, urlencoding::encode(&self.share_message(poll)))
    }

    pub fn mailto_url(&self, poll: &Poll) -> String {
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&self.email_subject(poll)),
            urlencoding::encode(&self.email_body(poll)),
        )
    }

    /// Copy the poll URL, then open the channel-specific target.
    pub fn action(&self, poll: &Poll, channel: ShareChannel) -> ShareAction {
        let poll_url = self.poll_url(&poll.id);
        let open_url = match channel {
            ShareChannel::WhatsApp => self.whatsapp_url(poll),
            ShareChannel::Email => self.mailto_url(poll),
            ShareChannel::Copy => poll_url.clone(),
        };
        ShareAction { clipboard_text: poll_url, open_url }
    }

    pub fn link_preview(&self, poll: &Poll) -> LinkPreview {
        LinkPreview {
            title: format!(
                "{} invites you to {}",
                poll.organiser_name_or_default(),
                poll.event_title_or_default()
            ),
            description: format!(
                "Vote on the dates that work for you for {} in {}.",
                poll.event_title_or_default(),
                poll.location_or_default()
            ),
            image_url: self.preview_image_url.clone(),
        }
    }
}

impl Default for ShareLinkComposer {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_BASE_URL)
    }
}
