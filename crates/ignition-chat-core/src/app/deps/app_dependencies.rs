// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::general::services::TimeProvider;
use crate::domain::notifications::repos::NotificationsRepository;
use crate::domain::presence::repos::HeartbeatRepository;
use crate::domain::user_directory::repos::UserDirectoryRepository;

use super::AppConfig;

pub type DynAppConfig = Arc<AppConfig>;
pub type DynHeartbeatRepository = Arc<dyn HeartbeatRepository>;
pub type DynNotificationsRepository = Arc<dyn NotificationsRepository>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynUserDirectoryRepository = Arc<dyn UserDirectoryRepository>;

pub struct AppDependencies {
    pub config: DynAppConfig,
    pub heartbeat_repo: DynHeartbeatRepository,
    pub notifications_repo: DynNotificationsRepository,
    pub time_provider: DynTimeProvider,
    pub user_directory_repo: DynUserDirectoryRepository,
}
