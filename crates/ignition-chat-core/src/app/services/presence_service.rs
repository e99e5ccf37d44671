// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{Context, Result};
use tracing::debug;

use ignition_proc_macros::InjectDependencies;

use crate::app::deps::*;
use crate::app::dtos::UserPresence;
use crate::domain::presence::models::{derive_status, ExplicitStatus, PresenceStatus};
use crate::domain::shared::models::UserEmail;

#[derive(InjectDependencies)]
pub struct PresenceService {
    config: DynAppConfig,
    heartbeat_repo: DynHeartbeatRepository,
    time_provider: DynTimeProvider,
    user_directory_repo: DynUserDirectoryRepository,
}

impl PresenceService {
    pub async fn record_heartbeat(&self, user: &UserEmail) -> Result<()> {
        self.heartbeat_repo
            .set_last_seen(user, self.time_provider.now())
            .await
    }

    /// Sets or clears the explicit status of `user`.
    pub async fn set_status(&self, user: &UserEmail, status: Option<ExplicitStatus>) -> Result<()> {
        debug!(
            "Setting status of {} to {}.",
            user,
            status.map_or("none".to_string(), |s| s.to_string())
        );
        self.heartbeat_repo
            .set_presence_status(user, status, self.time_provider.now())
            .await
    }

    pub async fn load_presence(
        &self,
        viewer: &UserEmail,
        subject: &UserEmail,
    ) -> Result<PresenceStatus> {
        let record = self
            .heartbeat_repo
            .get_presence(subject)
            .await
            .with_context(|| format!("Failed to load presence of {}", subject))?
            .unwrap_or_default();

        Ok(derive_status(
            &record.to_input(viewer == subject),
            self.time_provider.now(),
            self.config.presence_grace_window(),
        ))
    }

    /// Derives the status of each of `users` as seen by `viewer`. The result has the same order
    /// as `users`.
    pub async fn load_roster(
        &self,
        viewer: &UserEmail,
        users: &[UserEmail],
    ) -> Result<Vec<UserPresence>> {
        let records = self
            .heartbeat_repo
            .get_presences(users)
            .await
            .context("Failed to load presences")?;

        let now = self.time_provider.now();
        let grace_window = self.config.presence_grace_window();

        Ok(users
            .iter()
            .map(|user| {
                let input = records
                    .get(user)
                    .cloned()
                    .unwrap_or_default()
                    .to_input(user == viewer);

                UserPresence {
                    email: user.clone(),
                    status: derive_status(&input, now, grace_window),
                }
            })
            .collect())
    }

    /// Like `load_roster` for every user in the directory.
    pub async fn load_directory_roster(&self, viewer: &UserEmail) -> Result<Vec<UserPresence>> {
        let users = self
            .user_directory_repo
            .get_all_users()
            .await
            .context("Failed to load the user directory")?
            .into_iter()
            .map(|user| user.email)
            .collect::<Vec<_>>();

        self.load_roster(viewer, &users).await
    }
}
