use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved avatar image URL, either fully qualified or root-relative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarUrl(String);

impl AvatarUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AvatarUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for AvatarUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AvatarUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for AvatarUrl {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}
