// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::mentions::models::AmbiguityPolicy;

const MAX_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("{name} must not exceed one day (got {value_ms}ms)")]
    DurationTooLong { name: &'static str, value_ms: u64 },
    #[error(
        "presenceGraceWindowMs ({grace_window_ms}ms) must be at least twice heartbeatIntervalMs ({heartbeat_interval_ms}ms)"
    )]
    GraceWindowTooShort {
        grace_window_ms: u64,
        heartbeat_interval_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// How long after their last heartbeat other users still see someone as active.
    pub presence_grace_window_ms: u64,
    /// How often clients send a heartbeat.
    pub heartbeat_interval_ms: u64,
    pub mention_ambiguity_policy: AmbiguityPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            presence_grace_window_ms: 180_000,
            heartbeat_interval_ms: 60_000,
            mention_ambiguity_policy: Default::default(),
        }
    }
}

impl AppConfig {
    /// Parses and validates a JSON config. Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<AppConfig>(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value_ms) in [
            ("presenceGraceWindowMs", self.presence_grace_window_ms),
            ("heartbeatIntervalMs", self.heartbeat_interval_ms),
        ] {
            if value_ms == 0 {
                return Err(ConfigError::ZeroDuration(name));
            }
            if value_ms > MAX_DURATION_MS {
                return Err(ConfigError::DurationTooLong { name, value_ms });
            }
        }

        if self.presence_grace_window_ms < 2 * self.heartbeat_interval_ms {
            return Err(ConfigError::GraceWindowTooShort {
                grace_window_ms: self.presence_grace_window_ms,
                heartbeat_interval_ms: self.heartbeat_interval_ms,
            });
        }

        Ok(())
    }

    pub fn presence_grace_window(&self) -> Duration {
        duration_from_ms(self.presence_grace_window_ms)
    }

    pub fn heartbeat_interval(&self) -> Duration {
        duration_from_ms(self.heartbeat_interval_ms)
    }
}

fn duration_from_ms(value_ms: u64) -> Duration {
    Duration::milliseconds(value_ms.min(MAX_DURATION_MS) as i64)
}
