//! Organiser notification payload

use serde::{Deserialize, Serialize};

use super::poll::{Poll, PollId};
use super::vote::{PersistedVote, Responses};

/// JSON body posted to the notification endpoint.
///
/// Field names are part of the wire contract:
/// `{organiserEmail, organiserName, eventTitle, pollId, voterName, votes, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteNotification {
    pub organiser_email: String,
    pub organiser_name: String,
    pub event_title: Option<String>,
    pub poll_id: PollId,
    pub voter_name: String,
    pub votes: Responses,
    pub message: String,
}

impl VoteNotification {
    pub fn for_vote(poll: &Poll, vote: &PersistedVote) -> Self {
        Self {
            organiser_email: poll.organiser_email.clone().unwrap_or_default(),
            organiser_name: poll.organiser_name_or_default().to_string(),
            event_title: poll.event_title.clone(),
            poll_id: poll.id.clone(),
            voter_name: vote.name.clone(),
            votes: vote.responses.clone(),
            message: vote.message.clone().unwrap_or_default(),
        }
    }
}
