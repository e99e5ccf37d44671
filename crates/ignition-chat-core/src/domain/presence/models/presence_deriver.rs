// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Duration, Utc};

use super::{ExplicitStatus, PresenceInput, PresenceStatus};

/// Derives the status a viewer sees for a user.
///
/// 1. `invisible` always wins, even when users look at themselves.
/// 2. Users looking at themselves are `online` unless they picked `idle` or `dnd`.
/// 3. Everybody else is `offline` once the last activity is older than `grace_window`. Within the
///    window `idle` and `dnd` are kept, anything else is `online`.
///
/// `grace_window` should be a multiple of the heartbeat interval so that a single missed heartbeat
/// doesn't flip a user to `offline`.
pub fn derive_status(
    input: &PresenceInput,
    now: DateTime<Utc>,
    grace_window: Duration,
) -> PresenceStatus {
    if input.explicit_status == Some(ExplicitStatus::Invisible) {
        return PresenceStatus::Invisible;
    }

    if input.is_self {
        return status_while_active(input.explicit_status);
    }

    let is_within_grace_window = input
        .last_activity_at
        .map_or(false, |last_activity_at| now - last_activity_at <= grace_window);

    if !is_within_grace_window {
        return PresenceStatus::Offline;
    }

    status_while_active(input.explicit_status)
}

fn status_while_active(explicit_status: Option<ExplicitStatus>) -> PresenceStatus {
    match explicit_status {
        Some(ExplicitStatus::Idle) => PresenceStatus::Idle,
        Some(ExplicitStatus::Dnd) => PresenceStatus::Dnd,
        _ => PresenceStatus::Online,
    }
}
