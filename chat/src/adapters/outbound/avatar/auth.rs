use crate::domain::{
    models::{AuthenticatedUser, AvatarUrl},
    ports::outbound::AvatarProvider,
    AvatarError,
};

/// Uses the avatar URL asserted by the authentication provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthAvatar;

impl AvatarProvider for AuthAvatar {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn resolve(&self, user: &AuthenticatedUser) -> Result<AvatarUrl, AvatarError> {
        user.avatar_url()
            .map(AvatarUrl::from)
            .ok_or(AvatarError::NoAvatarUrl)
    }
}
