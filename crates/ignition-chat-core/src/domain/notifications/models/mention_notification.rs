// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MentionKind {
    /// The recipient was addressed by name.
    Direct,
    /// The recipient was only reached through `@everyone`.
    Everyone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionNotification {
    pub recipient: UserEmail,
    pub author: UserEmail,
    pub channel_id: String,
    pub message_id: String,
    pub kind: MentionKind,
    pub created_at: DateTime<Utc>,
}
