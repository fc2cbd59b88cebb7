//! Share channel and link preview types

use serde::{Deserialize, Serialize};

use crate::impl_text_conversions;

/// Channel the organiser picked to share the poll link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareChannel {
    WhatsApp,
    Email,
    Copy,
}

impl_text_conversions!(ShareChannel {
    WhatsApp => "whatsapp",
    Email => "email",
    Copy => "copy",
});

impl ShareChannel {
    /// Map a view-layer tag to a channel. Unknown tags fall back to `Copy`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Copy)
    }
}

/// Side effects to perform for one share click: copy, then open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareAction {
    pub clipboard_text: String,
    pub open_url: String,
}

/// Title, description and image for link unfurling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPreview {
    pub title: String,
    pub description: String,
    pub image_url: String,
}
