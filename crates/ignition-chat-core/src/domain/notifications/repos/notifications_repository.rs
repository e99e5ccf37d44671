// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::notifications::models::MentionNotification;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NotificationsRepository: Send + Sync {
    async fn insert_mention_notifications(
        &self,
        notifications: &[MentionNotification],
    ) -> Result<()>;
}
