// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::notifications::models::MentionNotification;
use crate::domain::notifications::repos::NotificationsRepository;

#[derive(Default)]
pub struct InMemoryNotificationsRepository {
    notifications: Mutex<Vec<MentionNotification>>,
}

impl InMemoryNotificationsRepository {
    /// Every stored notification in insertion order.
    pub fn all(&self) -> Vec<MentionNotification> {
        self.notifications.lock().clone()
    }
}

#[async_trait]
impl NotificationsRepository for InMemoryNotificationsRepository {
    async fn insert_mention_notifications(
        &self,
        notifications: &[MentionNotification],
    ) -> Result<()> {
        self.notifications
            .lock()
            .extend(notifications.iter().cloned());
        Ok(())
    }
}
