// ignition-chat/ignition-chat-core-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Duration, Utc};

use ignition_chat_core::dtos::{PresenceRecord, UserRecord};
use ignition_chat_core::test::mock_data;
use ignition_chat_core::user_email;

pub fn user(email: &str, name: Option<&str>) -> UserRecord {
    UserRecord {
        email: user_email!(email),
        name: name.map(ToString::to_string),
        image: None,
    }
}

/// The directory used throughout the tests.
pub fn directory() -> Vec<UserRecord> {
    vec![
        user("kasra@carclout.io", Some("Kasra")),
        user("kasra.m@carclout.io", Some("Kasra")),
        user("jane.doe@carclout.io", Some("Jane Doe")),
        user("bob@carclout.io", None),
    ]
}

pub fn seconds_ago(seconds: i64) -> DateTime<Utc> {
    mock_data::reference_date() - Duration::seconds(seconds)
}

pub fn heartbeat(seconds: i64, status: Option<&str>) -> PresenceRecord {
    PresenceRecord {
        presence_status: status.map(ToString::to_string),
        presence_updated_at: None,
        last_seen: Some(seconds_ago(seconds)),
    }
}
