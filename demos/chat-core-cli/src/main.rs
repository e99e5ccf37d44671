// ignition-chat/chat-core-cli
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::{env, fs};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use strum_macros::{Display, EnumString};
use tracing::level_filters::LevelFilter;
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use ignition_chat_core::app::deps::{AppDependencies, DynTimeProvider};
use ignition_chat_core::app::services::{MentionsService, PresenceService};
use ignition_chat_core::domain::general::services::{SystemTimeProvider, TimeProvider};
use ignition_chat_core::domain::presence::repos::HeartbeatRepository;
use ignition_chat_core::dtos::{PresenceRecord, SentMessage, UserEmail, UserRecord};
use ignition_chat_core::infra::notifications::InMemoryNotificationsRepository;
use ignition_chat_core::infra::presence::InMemoryHeartbeatRepository;
use ignition_chat_core::infra::user_directory::InMemoryUserDirectory;
use ignition_chat_core::AppConfig;

const USAGE: &str = "usage: chat-core-cli <fixture.json> parse <text>
       chat-core-cli <fixture.json> mentions <author> <text> [--broadcast]
       chat-core-cli <fixture.json> roster <viewer>";

#[derive(Debug, Clone, Copy, PartialEq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Command {
    Parse,
    Mentions,
    Roster,
}

#[derive(Deserialize)]
struct Fixture {
    now: Option<DateTime<Utc>>,
    #[serde(default)]
    config: AppConfig,
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    presences: HashMap<UserEmail, PresenceRecord>,
}

/// Pins the clock to the fixture's `now` so that its heartbeats stay meaningful.
struct FixtureTimeProvider(DateTime<Utc>);

impl TimeProvider for FixtureTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn enable_logging() {
    let max_level = env::var("IGNITION_LOG")
        .ok()
        .and_then(|level| Level::from_str(&level).ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::from_level(max_level)),
        )
        .init();
}

async fn build_dependencies(
    fixture: Fixture,
) -> Result<(AppDependencies, Arc<InMemoryNotificationsRepository>)> {
    fixture.config.validate()?;

    let heartbeat_repo = Arc::new(InMemoryHeartbeatRepository::new(fixture.presences));
    heartbeat_repo.ensure_indexes().await?;

    let time_provider: DynTimeProvider = match fixture.now {
        Some(now) => Arc::new(FixtureTimeProvider(now)),
        None => Arc::new(SystemTimeProvider::default()),
    };

    let notifications_repo = Arc::new(InMemoryNotificationsRepository::default());

    let deps = AppDependencies {
        config: Arc::new(fixture.config),
        heartbeat_repo,
        notifications_repo: notifications_repo.clone(),
        time_provider,
        user_directory_repo: Arc::new(InMemoryUserDirectory::new(fixture.users)),
    };

    Ok((deps, notifications_repo))
}

#[tokio::main]
async fn main() -> Result<()> {
    enable_logging();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let (Some(fixture_path), Some(command)) = (args.first(), args.get(1)) else {
        bail!(USAGE);
    };
    let command = Command::from_str(command).with_context(|| USAGE)?;

    let fixture = serde_json::from_str::<Fixture>(
        &fs::read_to_string(fixture_path)
            .with_context(|| format!("Failed to read fixture at {}", fixture_path))?,
    )
    .context("Failed to parse fixture")?;

    let (deps, notifications_repo) = build_dependencies(fixture).await?;
    info!("Running '{}'.", command);

    let output = match command {
        Command::Parse => {
            let Some(text) = args.get(2) else {
                bail!(USAGE);
            };
            let service = MentionsService::from(&deps);
            serde_json::json!({
                "result": service.parse(text),
                "spans": service.spans(text),
            })
        }
        Command::Mentions => {
            let (Some(author), Some(text)) = (args.get(2), args.get(3)) else {
                bail!(USAGE);
            };
            let service = MentionsService::from(&deps);
            let message = SentMessage {
                id: "cli".to_string(),
                channel_id: "cli".to_string(),
                author: author.parse()?,
                text: text.to_string(),
                author_can_broadcast: args.iter().any(|arg| arg == "--broadcast"),
            };
            let resolved = service.resolve_recipients(text).await?;
            service.fan_out(&message).await?;
            serde_json::json!({
                "resolved": resolved,
                "stored": notifications_repo.all(),
            })
        }
        Command::Roster => {
            let Some(viewer) = args.get(2) else {
                bail!(USAGE);
            };
            let service = PresenceService::from(&deps);
            serde_json::to_value(service.load_directory_roster(&viewer.parse()?).await?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
