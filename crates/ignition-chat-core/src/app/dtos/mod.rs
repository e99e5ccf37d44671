// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::mentions::models::{
    AmbiguityPolicy, BestMatch, MatchKind, MentionMatch, MentionResult, MentionSpan,
    RankedCandidate,
};
pub use crate::domain::notifications::models::{MentionKind, MentionNotification};
pub use crate::domain::presence::models::{
    ExplicitStatus, PresenceInput, PresenceRecord, PresenceStatus,
};
pub use crate::domain::shared::models::{UserEmail, UserEmailParseError};
pub use crate::domain::user_directory::models::{DirectoryEntry, UserRecord};

pub use resolved_mentions::ResolvedMentions;
pub use sent_message::SentMessage;
pub use user_presence::UserPresence;

mod resolved_mentions;
mod sent_message;
mod user_presence;
