// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use ambiguity_policy::AmbiguityPolicy;
pub use mention_match::{
    match_user_by_mention, rank_mentions, BestMatch, MatchKind, MentionMatch, RankedCandidate,
};
pub use mention_result::MentionResult;
pub use mention_scanner::{find_mention_spans, parse_mentions, MentionSpan, EVERYONE_TOKEN};

mod ambiguity_policy;
mod mention_match;
mod mention_result;
mod mention_scanner;
