// ignition-chat/ignition-chat-core-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use ignition_chat_core::app::services::MentionsService;
use ignition_chat_core::dtos::{
    AmbiguityPolicy, MatchKind, MentionKind, MentionMatch, MentionNotification, RankedCandidate,
    ResolvedMentions, SentMessage, UserEmail,
};
use ignition_chat_core::test::{mock_data, MockAppDependencies};
use ignition_chat_core::user_email;
use ignition_chat_core_tests::directory;

fn message(author: &str, text: &str, author_can_broadcast: bool) -> SentMessage {
    SentMessage {
        id: "msg-1".to_string(),
        channel_id: "general".to_string(),
        author: user_email!(author),
        text: text.to_string(),
        author_can_broadcast,
    }
}

fn notification(recipient: &str, author: &str, kind: MentionKind) -> MentionNotification {
    MentionNotification {
        recipient: user_email!(recipient),
        author: user_email!(author),
        channel_id: "general".to_string(),
        message_id: "msg-1".to_string(),
        kind,
        created_at: mock_data::reference_date(),
    }
}

fn expect_directory(deps: &mut MockAppDependencies) {
    deps.user_directory_repo
        .expect_get_all_users()
        .once()
        .returning(|| Box::pin(async { Ok(directory()) }));
}

#[tokio::test]
async fn test_resolves_recipients() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_directory(&mut deps);

    let service = MentionsService::from(&deps.into_deps());
    let resolved = service
        .resolve_recipients("hey @Kasra and @jane.doe, @nobody and @everyone")
        .await?;

    assert_eq!(
        resolved,
        ResolvedMentions {
            has_everyone: true,
            recipients: vec![
                user_email!("kasra@carclout.io"),
                user_email!("kasra.m@carclout.io"),
                user_email!("jane.doe@carclout.io"),
            ],
            ambiguous: vec![],
            unresolved: vec!["nobody".to_string()],
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_skips_ambiguous_mentions() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.config.mention_ambiguity_policy = AmbiguityPolicy::SkipAmbiguous;
    expect_directory(&mut deps);

    let service = MentionsService::from(&deps.into_deps());
    let resolved = service.resolve_recipients("@kasr @kasra").await?;

    assert_eq!(
        resolved,
        ResolvedMentions {
            has_everyone: false,
            recipients: vec![user_email!("kasra@carclout.io")],
            ambiguous: vec![MentionMatch {
                token: "kasr".to_string(),
                candidates: vec![
                    RankedCandidate {
                        email: user_email!("kasra@carclout.io"),
                        kind: MatchKind::LocalPartSubstring,
                    },
                    RankedCandidate {
                        email: user_email!("kasra.m@carclout.io"),
                        kind: MatchKind::LocalPartSubstring,
                    },
                ],
            }],
            unresolved: vec![],
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_best_rank_keeps_ties() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.config.mention_ambiguity_policy = AmbiguityPolicy::BestRank;
    expect_directory(&mut deps);

    let service = MentionsService::from(&deps.into_deps());
    let resolved = service.resolve_recipients("@kasr and @kasra").await?;

    assert_eq!(
        resolved.recipients,
        vec![
            user_email!("kasra@carclout.io"),
            user_email!("kasra.m@carclout.io"),
        ]
    );
    assert_eq!(resolved.ambiguous.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_does_not_load_directory_without_mentions() -> Result<()> {
    let deps = MockAppDependencies::default();
    let service = MentionsService::from(&deps.into_deps());

    assert_eq!(
        service.resolve_recipients("write to foo@bar.com").await?,
        ResolvedMentions::default()
    );
    assert!(service.resolve_recipients("@everyone").await?.has_everyone);
    assert!(service
        .fan_out(&message("kasra@carclout.io", "no mentions here", true))
        .await?
        .is_empty());

    Ok(())
}

#[tokio::test]
async fn test_fans_out_everyone_and_direct_mentions() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_directory(&mut deps);
    deps.notifications_repo
        .expect_insert_mention_notifications()
        .once()
        .returning(|notifications| {
            assert_eq!(notifications.len(), 3);
            Box::pin(async { Ok(()) })
        });

    let service = MentionsService::from(&deps.into_deps());
    let notifications = service
        .fan_out(&message(
            "kasra@carclout.io",
            "@everyone please review, @jane.doe especially",
            true,
        ))
        .await?;

    assert_eq!(
        notifications,
        vec![
            notification(
                "jane.doe@carclout.io",
                "kasra@carclout.io",
                MentionKind::Direct
            ),
            notification(
                "kasra.m@carclout.io",
                "kasra@carclout.io",
                MentionKind::Everyone
            ),
            notification("bob@carclout.io", "kasra@carclout.io", MentionKind::Everyone),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_ignores_everyone_without_permission() -> Result<()> {
    let deps = MockAppDependencies::default();
    let service = MentionsService::from(&deps.into_deps());

    let notifications = service
        .fan_out(&message("bob@carclout.io", "@everyone free pizza", false))
        .await?;

    assert!(notifications.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_keeps_direct_mentions_when_everyone_is_refused() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_directory(&mut deps);
    deps.notifications_repo
        .expect_insert_mention_notifications()
        .once()
        .returning(|notifications| {
            assert_eq!(notifications.len(), 1);
            Box::pin(async { Ok(()) })
        });

    let service = MentionsService::from(&deps.into_deps());
    let notifications = service
        .fan_out(&message("bob@carclout.io", "@everyone @jane.doe", false))
        .await?;

    assert_eq!(
        notifications,
        vec![notification(
            "jane.doe@carclout.io",
            "bob@carclout.io",
            MentionKind::Direct
        )]
    );

    Ok(())
}

#[tokio::test]
async fn test_author_is_not_notified() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_directory(&mut deps);
    deps.notifications_repo
        .expect_insert_mention_notifications()
        .once()
        .returning(|_| Box::pin(async { Ok(()) }));

    let service = MentionsService::from(&deps.into_deps());
    let notifications = service
        .fan_out(&message("kasra@carclout.io", "note to self @kasra", false))
        .await?;

    assert_eq!(
        notifications,
        vec![notification(
            "kasra.m@carclout.io",
            "kasra@carclout.io",
            MentionKind::Direct
        )]
    );

    Ok(())
}

#[tokio::test]
async fn test_skips_storage_when_only_author_is_mentioned() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_directory(&mut deps);

    let service = MentionsService::from(&deps.into_deps());
    let notifications = service
        .fan_out(&message("bob@carclout.io", "talking to myself @bob", false))
        .await?;

    assert!(notifications.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_propagates_storage_errors() {
    let mut deps = MockAppDependencies::default();
    expect_directory(&mut deps);
    deps.notifications_repo
        .expect_insert_mention_notifications()
        .once()
        .returning(|_| Box::pin(async { Err(anyhow::format_err!("store unavailable")) }));

    let service = MentionsService::from(&deps.into_deps());
    let result = service
        .fan_out(&message("bob@carclout.io", "@jane.doe ping", false))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_is_mentioning() {
    let service = MentionsService::from(&MockAppDependencies::default().into_deps());
    let viewer: UserEmail = user_email!("jane.doe@carclout.io");

    assert!(service.is_mentioning("hey @Jane.Doe", &viewer));
    assert!(service.is_mentioning("hey @everyone", &viewer));
    assert!(!service.is_mentioning("hey @jane", &viewer));
    assert!(!service.is_mentioning("mail jane.doe@carclout.io", &viewer));
}
