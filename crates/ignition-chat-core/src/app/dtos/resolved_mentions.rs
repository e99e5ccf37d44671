// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;

use crate::domain::mentions::models::MentionMatch;
use crate::domain::shared::models::UserEmail;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMentions {
    pub has_everyone: bool,
    /// Users addressed by name, deduplicated, in token order.
    pub recipients: Vec<UserEmail>,
    /// Tokens that matched more than one user at the best rank.
    pub ambiguous: Vec<MentionMatch>,
    /// Tokens that matched nobody.
    pub unresolved: Vec<String>,
}
