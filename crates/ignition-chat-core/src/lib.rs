// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{AppConfig, ConfigError};
pub use app::dtos;
pub use domain::mentions::models::{
    find_mention_spans, match_user_by_mention, parse_mentions, rank_mentions,
};
pub use domain::presence::models::derive_status;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
pub mod domain;
pub mod infra;

#[cfg(any(test, feature = "test"))]
mod macros;
