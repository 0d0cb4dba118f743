use crate::domain::{
    models::{AuthenticatedUser, AvatarUrl},
    ports::outbound::AvatarProvider,
    AvatarError,
};

pub const DEFAULT_GRAVATAR_URL: &str = "//www.gravatar.com/avatar/";

/// Builds a URL on a hash-keyed avatar service from the user's unique id.
///
/// Always produces a URL; whether the service actually has an image for the
/// id is its own concern. Suitable as the last provider of a chain.
#[derive(Debug, Clone)]
pub struct GravatarAvatar {
    base_url: String,
}

impl GravatarAvatar {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GravatarAvatar {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVATAR_URL)
    }
}

impl AvatarProvider for GravatarAvatar {
    fn name(&self) -> &'static str {
        "gravatar"
    }

    fn resolve(&self, user: &AuthenticatedUser) -> Result<AvatarUrl, AvatarError> {
        Ok(AvatarUrl::new(format!("{}{}", self.base_url, user.unique_id())))
    }
}
