// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserEmail;
use crate::domain::user_directory::models::DirectoryEntry;

/// How a directory entry matched a token. Variants are ordered from the strongest to the weakest
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    ExactLocalPart,
    ExactDisplayName,
    NormalizedDisplayName,
    LocalPartSubstring,
    DisplayNameSubstring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub email: UserEmail,
    pub kind: MatchKind,
}

/// All directory entries addressed by a token, in directory order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionMatch {
    pub token: String,
    pub candidates: Vec<RankedCandidate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestMatch {
    None,
    Unique(UserEmail),
    /// More than one entry shares the best rank.
    Ambiguous(Vec<UserEmail>),
}

impl MentionMatch {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn emails(&self) -> Vec<UserEmail> {
        self.candidates.iter().map(|c| c.email.clone()).collect()
    }

    pub fn best(&self) -> BestMatch {
        let Some(best_kind) = self.candidates.iter().map(|c| c.kind).min() else {
            return BestMatch::None;
        };

        let mut tied = self
            .candidates
            .iter()
            .filter(|c| c.kind == best_kind)
            .map(|c| c.email.clone())
            .collect::<Vec<_>>();

        if tied.len() == 1 {
            return BestMatch::Unique(tied.swap_remove(0));
        }
        BestMatch::Ambiguous(tied)
    }
}

/// Returns the emails of all directory entries addressed by `token`, in directory order.
pub fn match_user_by_mention(token: &str, directory: &[DirectoryEntry]) -> Vec<UserEmail> {
    rank_mentions(token, directory).emails()
}

/// Like `match_user_by_mention`, but records for every candidate the strongest rule it satisfied.
pub fn rank_mentions(token: &str, directory: &[DirectoryEntry]) -> MentionMatch {
    let token = token.to_lowercase();

    let candidates = if token.is_empty() {
        vec![]
    } else {
        let normalized_token = strip_separators(&token);

        directory
            .iter()
            .filter_map(|entry| {
                match_kind(&token, &normalized_token, entry).map(|kind| RankedCandidate {
                    email: entry.email.clone(),
                    kind,
                })
            })
            .collect()
    };

    MentionMatch { token, candidates }
}

fn match_kind(token: &str, normalized_token: &str, entry: &DirectoryEntry) -> Option<MatchKind> {
    let local_part = entry.email.local_part();
    let name = entry.name.as_deref().map(str::to_lowercase);

    if local_part == token {
        return Some(MatchKind::ExactLocalPart);
    }

    if let Some(name) = &name {
        if name == token {
            return Some(MatchKind::ExactDisplayName);
        }
        let normalized_name = strip_separators(name);
        if !normalized_name.is_empty() && normalized_name == normalized_token {
            return Some(MatchKind::NormalizedDisplayName);
        }
    }

    if local_part.contains(token) {
        return Some(MatchKind::LocalPartSubstring);
    }

    match name {
        Some(name) if name.contains(token) => Some(MatchKind::DisplayNameSubstring),
        _ => None,
    }
}

fn strip_separators(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '.' | '_' | '-') && !c.is_whitespace())
        .collect()
}
