// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use heartbeat_repository::HeartbeatRepository;

mod heartbeat_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::heartbeat_repository::MockHeartbeatRepository;
}
