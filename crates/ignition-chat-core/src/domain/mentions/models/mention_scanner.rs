// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::MentionResult;

pub const EVERYONE_TOKEN: &str = "everyone";

/// A single `@token` occurrence in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionSpan {
    /// The lowercased token without the leading `@`.
    pub token: String,
    /// Byte range of `@token` (including the `@`) in the scanned text.
    pub range: Range<usize>,
}

/// Returns every `@token` occurrence in `text`, in text order.
///
/// A token is an `@` followed by one or more ASCII letters, digits, `.`, `_` or `-`. The `@` must
/// not directly follow an ASCII letter or digit, so that email addresses like `foo@bar.com` are
/// not picked up.
pub fn find_mention_spans(text: &str) -> Vec<MentionSpan> {
    let bytes = text.as_bytes();
    let mut spans = vec![];
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] != b'@' || !is_mention_start(bytes, idx) {
            idx += 1;
            continue;
        }

        let token_start = idx + 1;
        let token_end = bytes[token_start..]
            .iter()
            .position(|b| !is_token_byte(*b))
            .map(|len| token_start + len)
            .unwrap_or(bytes.len());

        if token_end == token_start {
            idx += 1;
            continue;
        }

        // Token bytes are ASCII, so both offsets sit on char boundaries.
        spans.push(MentionSpan {
            token: text[token_start..token_end].to_ascii_lowercase(),
            range: idx..token_end,
        });
        idx = token_end;
    }

    spans
}

/// Parses `text` into its distinct mention tokens and whether it addresses `@everyone`.
pub fn parse_mentions(text: &str) -> MentionResult {
    let mentions = find_mention_spans(text)
        .into_iter()
        .map(|span| span.token)
        .filter(|token| token != EVERYONE_TOKEN)
        .collect::<IndexSet<_>>();

    MentionResult {
        has_everyone: addresses_everyone(text.as_bytes()),
        mentions,
    }
}

/// `@everyone` (case-insensitive) with no letter or digit before the `@` and no word character
/// after the token.
fn addresses_everyone(bytes: &[u8]) -> bool {
    let token = EVERYONE_TOKEN.as_bytes();

    bytes.iter().enumerate().any(|(idx, b)| {
        if *b != b'@' || !is_mention_start(bytes, idx) {
            return false;
        }

        let token_start = idx + 1;
        let token_end = token_start + token.len();

        let Some(candidate) = bytes.get(token_start..token_end) else {
            return false;
        };

        candidate.eq_ignore_ascii_case(token)
            && bytes.get(token_end).map_or(true, |b| !is_word_byte(*b))
    })
}

fn is_mention_start(bytes: &[u8], at_idx: usize) -> bool {
    at_idx == 0 || !bytes[at_idx - 1].is_ascii_alphanumeric()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-')
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
