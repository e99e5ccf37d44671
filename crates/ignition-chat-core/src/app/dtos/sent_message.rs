// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserEmail;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentMessage {
    pub id: String,
    pub channel_id: String,
    pub author: UserEmail,
    pub text: String,
    /// Whether the author's role allows addressing `@everyone`.
    #[serde(default)]
    pub author_can_broadcast: bool,
}
