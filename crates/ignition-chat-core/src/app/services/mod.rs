// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mentions_service::MentionsService;
pub use presence_service::PresenceService;

mod mentions_service;
mod presence_service;
