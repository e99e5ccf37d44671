// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::presence::models::{ExplicitStatus, PresenceRecord};
use crate::domain::presence::repos::HeartbeatRepository;
use crate::domain::shared::models::UserEmail;

#[derive(Default)]
pub struct InMemoryHeartbeatRepository {
    records: RwLock<HashMap<UserEmail, PresenceRecord>>,
}

impl InMemoryHeartbeatRepository {
    pub fn new(records: impl IntoIterator<Item = (UserEmail, PresenceRecord)>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }
}

#[async_trait]
impl HeartbeatRepository for InMemoryHeartbeatRepository {
    async fn ensure_indexes(&self) -> Result<()> {
        Ok(())
    }

    async fn get_presence(&self, user: &UserEmail) -> Result<Option<PresenceRecord>> {
        Ok(self.records.read().get(user).cloned())
    }

    async fn get_presences(
        &self,
        users: &[UserEmail],
    ) -> Result<HashMap<UserEmail, PresenceRecord>> {
        let records = self.records.read();
        Ok(users
            .iter()
            .filter_map(|user| records.get(user).map(|r| (user.clone(), r.clone())))
            .collect())
    }

    async fn set_last_seen(&self, user: &UserEmail, timestamp: DateTime<Utc>) -> Result<()> {
        let mut records = self.records.write();
        let record = records.entry(user.clone()).or_default();
        // Heartbeats may arrive out of order.
        record.last_seen = record.last_seen.max(Some(timestamp));
        Ok(())
    }

    async fn set_presence_status(
        &self,
        user: &UserEmail,
        status: Option<ExplicitStatus>,
        timestamp: DateTime<Utc>,
    ) -> Result<()> {
        let mut records = self.records.write();
        let record = records.entry(user.clone()).or_default();
        record.presence_status = status.map(|s| s.to_string());
        record.presence_updated_at = Some(timestamp);
        Ok(())
    }
}
