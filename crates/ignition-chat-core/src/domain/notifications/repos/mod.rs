// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use notifications_repository::NotificationsRepository;

mod notifications_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::notifications_repository::MockNotificationsRepository;
}
