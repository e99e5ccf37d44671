// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExplicitStatus;

/// A row of the heartbeat store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresenceRecord {
    #[serde(default)]
    pub presence_status: Option<String>,
    #[serde(default)]
    pub presence_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresenceInput {
    pub last_activity_at: Option<DateTime<Utc>>,
    pub explicit_status: Option<ExplicitStatus>,
    pub is_self: bool,
}

impl PresenceRecord {
    /// Setting a status counts as activity, so the later of `last_seen` and
    /// `presence_updated_at` is used.
    pub fn last_activity_at(&self) -> Option<DateTime<Utc>> {
        self.last_seen.max(self.presence_updated_at)
    }

    pub fn to_input(&self, is_self: bool) -> PresenceInput {
        PresenceInput {
            last_activity_at: self.last_activity_at(),
            explicit_status: ExplicitStatus::from_stored(self.presence_status.as_deref()),
            is_self,
        }
    }
}
