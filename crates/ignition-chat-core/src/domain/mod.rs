// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod general;
pub mod mentions;
pub mod notifications;
pub mod presence;
pub mod shared;
pub mod user_directory;
