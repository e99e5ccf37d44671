// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::presence::models::{ExplicitStatus, PresenceRecord};
use crate::domain::shared::models::UserEmail;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait HeartbeatRepository: Send + Sync {
    /// Creates whatever lookup structures the store needs. Called once at startup, must be safe
    /// to call repeatedly.
    async fn ensure_indexes(&self) -> Result<()>;

    async fn get_presence(&self, user: &UserEmail) -> Result<Option<PresenceRecord>>;

    /// Returns the records for `users`. Users without a record are omitted.
    async fn get_presences(
        &self,
        users: &[UserEmail],
    ) -> Result<HashMap<UserEmail, PresenceRecord>>;

    async fn set_last_seen(&self, user: &UserEmail, timestamp: DateTime<Utc>) -> Result<()>;

    /// Stores (or clears) the explicit status of `user` together with the time it was set.
    async fn set_presence_status(
        &self,
        user: &UserEmail,
        status: Option<ExplicitStatus>,
        timestamp: DateTime<Utc>,
    ) -> Result<()>;
}
