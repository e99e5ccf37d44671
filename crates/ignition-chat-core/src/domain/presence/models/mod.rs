// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presence_deriver::derive_status;
pub use presence_input::{PresenceInput, PresenceRecord};
pub use presence_status::{ExplicitStatus, PresenceStatus};

mod presence_deriver;
mod presence_input;
mod presence_status;
