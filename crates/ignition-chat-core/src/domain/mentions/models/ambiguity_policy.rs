// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserEmail;

use super::{BestMatch, MentionMatch};

/// Decides who gets notified when a token matches more than one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AmbiguityPolicy {
    /// Every matching entry is a recipient.
    #[default]
    NotifyAll,
    /// Only the entries sharing the strongest match kind are recipients.
    BestRank,
    /// The token resolves only if a single entry has the strongest match kind.
    SkipAmbiguous,
}

impl AmbiguityPolicy {
    pub fn recipients(&self, mention_match: &MentionMatch) -> Vec<UserEmail> {
        match self {
            Self::NotifyAll => mention_match.emails(),
            Self::BestRank => match mention_match.best() {
                BestMatch::None => vec![],
                BestMatch::Unique(email) => vec![email],
                BestMatch::Ambiguous(emails) => emails,
            },
            Self::SkipAmbiguous => match mention_match.best() {
                BestMatch::Unique(email) => vec![email],
                BestMatch::None | BestMatch::Ambiguous(_) => vec![],
            },
        }
    }
}
