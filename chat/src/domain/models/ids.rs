use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// A validated, stable per-user identifier.
///
/// Assigned by the authentication layer and used as the lookup key by every
/// avatar provider, including as a file name prefix in the avatar directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueId(String);

#[derive(Error, Debug, PartialEq)]
pub enum UniqueIdError {
    #[error("unique id must not be empty")]
    Empty,
    #[error("'{0}' is not a valid unique id: contains '{1}'")]
    InvalidCharacter(String, char),
}

const FORBIDDEN_CHARS: [char; 5] = ['/', '\\', '*', '?', '['];

impl UniqueId {
    /// Derives the identifier the authentication layer assigns to an email
    /// address: hex SHA-256 of the trimmed, lowercased address.
    pub fn from_email(email: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(email.trim().to_lowercase().as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UniqueId {
    type Error = UniqueIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(UniqueIdError::Empty);
        }

        if let Some(c) = value.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(UniqueIdError::InvalidCharacter(value, c));
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for UniqueId {
    type Error = UniqueIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<UniqueId> for String {
    fn from(id: UniqueId) -> Self {
        id.0
    }
}

impl AsRef<str> for UniqueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
