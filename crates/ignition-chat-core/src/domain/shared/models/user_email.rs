// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UserEmailParseError {
    #[error("Missing '@' in email address '{0}'")]
    MissingSeparator(String),
    #[error("Empty local part in email address '{0}'")]
    EmptyLocalPart(String),
    #[error("Empty domain in email address '{0}'")]
    EmptyDomain(String),
}

/// The unique key of a user in the directory. Always stored lowercased.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserEmail(String);

impl UserEmail {
    /// The part before the first `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    pub fn domain(&self) -> &str {
        self.split().1
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn split(&self) -> (&str, &str) {
        // Validated in `from_str`.
        self.0.split_once('@').unwrap_or((&self.0, ""))
    }
}

impl FromStr for UserEmail {
    type Err = UserEmailParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let email = s.trim().to_lowercase();

        let Some((local_part, domain)) = email.split_once('@') else {
            return Err(UserEmailParseError::MissingSeparator(s.to_string()));
        };
        if local_part.is_empty() {
            return Err(UserEmailParseError::EmptyLocalPart(s.to_string()));
        }
        if domain.is_empty() {
            return Err(UserEmailParseError::EmptyDomain(s.to_string()));
        }

        Ok(UserEmail(email))
    }
}

impl<'de> Deserialize<'de> for UserEmail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl Debug for UserEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserEmail({})", self.0)
    }
}

impl Display for UserEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
