// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use ignition_proc_macros::InjectDependencies;

use crate::app::deps::*;
use crate::app::dtos::{ResolvedMentions, SentMessage};
use crate::domain::mentions::models::{
    find_mention_spans, parse_mentions, rank_mentions, BestMatch, MentionResult, MentionSpan,
};
use crate::domain::notifications::models::{MentionKind, MentionNotification};
use crate::domain::shared::models::UserEmail;
use crate::domain::user_directory::models::DirectoryEntry;

#[derive(InjectDependencies)]
pub struct MentionsService {
    config: DynAppConfig,
    notifications_repo: DynNotificationsRepository,
    time_provider: DynTimeProvider,
    user_directory_repo: DynUserDirectoryRepository,
}

impl MentionsService {
    pub fn parse(&self, text: &str) -> MentionResult {
        parse_mentions(text)
    }

    pub fn spans(&self, text: &str) -> Vec<MentionSpan> {
        find_mention_spans(text)
    }

    /// Returns true if `text` addresses `viewer` by their local part or addresses `@everyone`.
    pub fn is_mentioning(&self, text: &str, viewer: &UserEmail) -> bool {
        let mentions = parse_mentions(text);
        mentions.has_everyone || mentions.addresses(viewer)
    }

    pub async fn resolve_recipients(&self, text: &str) -> Result<ResolvedMentions> {
        let mentions = parse_mentions(text);

        if mentions.mentions.is_empty() {
            return Ok(ResolvedMentions {
                has_everyone: mentions.has_everyone,
                ..Default::default()
            });
        }

        let directory = self.load_directory().await?;
        Ok(self.resolve(mentions, &directory))
    }

    /// Resolves the recipients of `message` and stores a notification for each of them.
    ///
    /// The author is never notified. `@everyone` reaches every user in the directory, but only if
    /// the author is allowed to broadcast.
    pub async fn fan_out(&self, message: &SentMessage) -> Result<Vec<MentionNotification>> {
        let mentions = parse_mentions(&message.text);

        let is_broadcast = mentions.has_everyone && message.author_can_broadcast;
        if mentions.has_everyone && !is_broadcast {
            warn!(
                "Ignoring @everyone in message {} by {} who is not allowed to broadcast.",
                message.id, message.author
            );
        }

        if mentions.mentions.is_empty() && !is_broadcast {
            return Ok(vec![]);
        }

        let directory = self.load_directory().await?;
        let resolved = self.resolve(mentions, &directory);

        let mut recipients = IndexMap::<UserEmail, MentionKind>::new();

        for recipient in resolved.recipients {
            recipients.insert(recipient, MentionKind::Direct);
        }

        if is_broadcast {
            for entry in directory {
                recipients.entry(entry.email).or_insert(MentionKind::Everyone);
            }
        }

        recipients.shift_remove(&message.author);

        if recipients.is_empty() {
            debug!("Message {} does not mention anybody.", message.id);
            return Ok(vec![]);
        }

        let now = self.time_provider.now();
        let notifications = recipients
            .into_iter()
            .map(|(recipient, kind)| MentionNotification {
                recipient,
                author: message.author.clone(),
                channel_id: message.channel_id.clone(),
                message_id: message.id.clone(),
                kind,
                created_at: now,
            })
            .collect::<Vec<_>>();

        self.notifications_repo
            .insert_mention_notifications(&notifications)
            .await
            .with_context(|| {
                format!("Failed to store mention notifications for message {}", message.id)
            })?;

        info!(
            "Created {} mention notification(s) for message {}.",
            notifications.len(),
            message.id
        );

        Ok(notifications)
    }
}

impl MentionsService {
    async fn load_directory(&self) -> Result<Vec<DirectoryEntry>> {
        let users = self
            .user_directory_repo
            .get_all_users()
            .await
            .context("Failed to load the user directory")?;
        Ok(users.into_iter().map(DirectoryEntry::from).collect())
    }

    fn resolve(&self, mentions: MentionResult, directory: &[DirectoryEntry]) -> ResolvedMentions {
        let policy = self.config.mention_ambiguity_policy;

        let mut recipients = IndexSet::new();
        let mut ambiguous = vec![];
        let mut unresolved = vec![];

        for token in mentions.tokens() {
            let mention_match = rank_mentions(token, directory);

            if mention_match.is_empty() {
                debug!("Mention @{} does not match any user.", token);
                unresolved.push(token.to_string());
                continue;
            }

            let resolved = policy.recipients(&mention_match);

            if let BestMatch::Ambiguous(emails) = mention_match.best() {
                if resolved.is_empty() {
                    warn!(
                        "Skipping mention @{} which is ambiguous between {} users.",
                        token,
                        emails.len()
                    );
                } else {
                    debug!(
                        "Mention @{} is ambiguous between {} users, notifying {}.",
                        token,
                        emails.len(),
                        resolved.len()
                    );
                }
                ambiguous.push(mention_match);
            }

            recipients.extend(resolved);
        }

        ResolvedMentions {
            has_everyone: mentions.has_everyone,
            recipients: recipients.into_iter().collect(),
            ambiguous,
            unresolved,
        }
    }
}
