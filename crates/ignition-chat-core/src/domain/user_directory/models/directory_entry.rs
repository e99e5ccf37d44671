// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserEmail;

/// A user as returned by the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: UserEmail,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The subset of a `UserRecord` that mentions are matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub email: UserEmail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<UserRecord> for DirectoryEntry {
    fn from(value: UserRecord) -> Self {
        DirectoryEntry {
            email: value.email,
            name: value.name.filter(|name| !name.trim().is_empty()),
        }
    }
}
