// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserEmail;

/// The mentions found in a single message.
///
/// `everyone` is never part of `mentions`, it is only reflected by `has_everyone`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionResult {
    pub has_everyone: bool,
    /// Lowercased tokens without the leading `@`, in order of first occurrence.
    pub mentions: IndexSet<String>,
}

impl MentionResult {
    pub fn is_empty(&self) -> bool {
        !self.has_everyone && self.mentions.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.mentions.iter().map(String::as_str)
    }

    /// Returns true if one of the tokens equals the local part of `email`. `@everyone` is not
    /// taken into account.
    pub fn addresses(&self, email: &UserEmail) -> bool {
        self.mentions.contains(email.local_part())
    }
}
