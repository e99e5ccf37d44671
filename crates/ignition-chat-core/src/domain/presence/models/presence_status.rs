// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A status a user picked for themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExplicitStatus {
    Online,
    Idle,
    Dnd,
    Invisible,
}

/// The status shown to a viewer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PresenceStatus {
    Online,
    Idle,
    Dnd,
    Invisible,
    #[default]
    Offline,
}

impl ExplicitStatus {
    /// Parses a stored status. Unknown or empty values count as "no explicit status".
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        value.and_then(|value| value.trim().parse().ok())
    }
}

impl From<ExplicitStatus> for PresenceStatus {
    fn from(value: ExplicitStatus) -> Self {
        match value {
            ExplicitStatus::Online => PresenceStatus::Online,
            ExplicitStatus::Idle => PresenceStatus::Idle,
            ExplicitStatus::Dnd => PresenceStatus::Dnd,
            ExplicitStatus::Invisible => PresenceStatus::Invisible,
        }
    }
}
