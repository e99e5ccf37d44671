// ignition-chat/ignition-chat-core-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use mockall::predicate;
use pretty_assertions::assert_eq;

use ignition_chat_core::app::services::PresenceService;
use ignition_chat_core::dtos::{ExplicitStatus, PresenceStatus, UserPresence};
use ignition_chat_core::test::{mock_data, ConstantTimeProvider, MockAppDependencies};
use ignition_chat_core::user_email;
use ignition_chat_core_tests::{directory, heartbeat};

fn presence(email: &str, status: PresenceStatus) -> UserPresence {
    UserPresence {
        email: user_email!(email),
        status,
    }
}

#[tokio::test]
async fn test_loads_roster_in_input_order() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.heartbeat_repo
        .expect_get_presences()
        .once()
        .returning(|users| {
            assert_eq!(users.len(), 4);
            Box::pin(async {
                Ok(HashMap::from([
                    (user_email!("kasra@carclout.io"), heartbeat(500, None)),
                    (
                        user_email!("jane.doe@carclout.io"),
                        heartbeat(10, Some("dnd")),
                    ),
                    (user_email!("bob@carclout.io"), heartbeat(200, Some("idle"))),
                ]))
            })
        });

    let service = PresenceService::from(&deps.into_deps());
    let roster = service
        .load_roster(
            &user_email!("kasra@carclout.io"),
            &[
                user_email!("bob@carclout.io"),
                user_email!("kasra@carclout.io"),
                user_email!("ghost@carclout.io"),
                user_email!("jane.doe@carclout.io"),
            ],
        )
        .await?;

    assert_eq!(
        roster,
        vec![
            presence("bob@carclout.io", PresenceStatus::Offline),
            presence("kasra@carclout.io", PresenceStatus::Online),
            presence("ghost@carclout.io", PresenceStatus::Offline),
            presence("jane.doe@carclout.io", PresenceStatus::Dnd),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_uses_configured_grace_window() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.config.presence_grace_window_ms = 300_000;
    deps.heartbeat_repo
        .expect_get_presence()
        .once()
        .with(predicate::eq(user_email!("bob@carclout.io")))
        .returning(|_| Box::pin(async { Ok(Some(heartbeat(200, Some("idle")))) }));

    let service = PresenceService::from(&deps.into_deps());

    assert_eq!(
        service
            .load_presence(
                &user_email!("jane.doe@carclout.io"),
                &user_email!("bob@carclout.io")
            )
            .await?,
        PresenceStatus::Idle
    );

    Ok(())
}

#[tokio::test]
async fn test_invisible_applies_to_self() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.heartbeat_repo
        .expect_get_presence()
        .once()
        .returning(|_| Box::pin(async { Ok(Some(heartbeat(1, Some("invisible")))) }));

    let service = PresenceService::from(&deps.into_deps());
    let me = user_email!("jane.doe@carclout.io");

    assert_eq!(
        service.load_presence(&me, &me).await?,
        PresenceStatus::Invisible
    );

    Ok(())
}

#[tokio::test]
async fn test_missing_record() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.heartbeat_repo
        .expect_get_presence()
        .times(2)
        .returning(|_| Box::pin(async { Ok(None) }));

    let service = PresenceService::from(&deps.into_deps());
    let me = user_email!("jane.doe@carclout.io");
    let other = user_email!("bob@carclout.io");

    assert_eq!(service.load_presence(&me, &me).await?, PresenceStatus::Online);
    assert_eq!(
        service.load_presence(&me, &other).await?,
        PresenceStatus::Offline
    );

    Ok(())
}

#[tokio::test]
async fn test_records_heartbeat_and_status_with_current_time() -> Result<()> {
    let time_provider = ConstantTimeProvider::new(mock_data::reference_date());
    time_provider.advance(Duration::seconds(42));
    let expected_time = mock_data::reference_date() + Duration::seconds(42);

    let mut deps = MockAppDependencies::default();
    deps.time_provider = Arc::new(time_provider);
    deps.heartbeat_repo
        .expect_set_last_seen()
        .once()
        .with(
            predicate::eq(user_email!("bob@carclout.io")),
            predicate::eq(expected_time),
        )
        .returning(|_, _| Box::pin(async { Ok(()) }));
    deps.heartbeat_repo
        .expect_set_presence_status()
        .once()
        .with(
            predicate::eq(user_email!("bob@carclout.io")),
            predicate::eq(Some(ExplicitStatus::Dnd)),
            predicate::eq(expected_time),
        )
        .returning(|_, _, _| Box::pin(async { Ok(()) }));

    let service = PresenceService::from(&deps.into_deps());
    let bob = user_email!("bob@carclout.io");

    service.record_heartbeat(&bob).await?;
    service.set_status(&bob, Some(ExplicitStatus::Dnd)).await?;

    Ok(())
}

#[tokio::test]
async fn test_loads_directory_roster() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.user_directory_repo
        .expect_get_all_users()
        .once()
        .returning(|| Box::pin(async { Ok(directory()) }));
    deps.heartbeat_repo
        .expect_get_presences()
        .once()
        .returning(|_| {
            Box::pin(async {
                Ok(HashMap::from([(
                    user_email!("jane.doe@carclout.io"),
                    heartbeat(30, None),
                )]))
            })
        });

    let service = PresenceService::from(&deps.into_deps());
    let roster = service
        .load_directory_roster(&user_email!("bob@carclout.io"))
        .await?;

    assert_eq!(
        roster,
        vec![
            presence("kasra@carclout.io", PresenceStatus::Offline),
            presence("kasra.m@carclout.io", PresenceStatus::Offline),
            presence("jane.doe@carclout.io", PresenceStatus::Online),
            presence("bob@carclout.io", PresenceStatus::Online),
        ]
    );

    Ok(())
}
