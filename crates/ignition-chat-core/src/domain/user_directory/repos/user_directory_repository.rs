// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::user_directory::models::UserRecord;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserDirectoryRepository: Send + Sync {
    /// Returns every known user.
    async fn get_all_users(&self) -> Result<Vec<UserRecord>>;
}
