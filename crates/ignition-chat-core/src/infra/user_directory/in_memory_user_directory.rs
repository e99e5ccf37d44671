// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::shared::models::UserEmail;
use crate::domain::user_directory::models::UserRecord;
use crate::domain::user_directory::repos::UserDirectoryRepository;

/// Keeps users in insertion order. Inserting a known email replaces the record in place.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<IndexMap<UserEmail, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let directory = Self::default();
        for user in users {
            directory.upsert(user);
        }
        directory
    }

    pub fn upsert(&self, user: UserRecord) {
        self.users.write().insert(user.email.clone(), user);
    }

    pub fn remove(&self, email: &UserEmail) -> Option<UserRecord> {
        self.users.write().shift_remove(email)
    }
}

#[async_trait]
impl UserDirectoryRepository for InMemoryUserDirectory {
    async fn get_all_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users.read().values().cloned().collect())
    }
}
