use std::sync::Arc;

use crate::domain::{
    models::{AuthenticatedUser, AvatarUrl},
    AvatarError,
};

/// A strategy for producing an avatar image URL for a user.
///
/// Implementations are shared by every concurrent resolution and must not
/// keep per-call state. A miss is reported as [`AvatarError::NoAvatarUrl`],
/// never as a panic.
pub trait AvatarProvider: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    fn resolve(&self, user: &AuthenticatedUser) -> Result<AvatarUrl, AvatarError>;
}

impl<P: AvatarProvider + ?Sized> AvatarProvider for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn resolve(&self, user: &AuthenticatedUser) -> Result<AvatarUrl, AvatarError> {
        (**self).resolve(user)
    }
}

impl<P: AvatarProvider + ?Sized> AvatarProvider for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn resolve(&self, user: &AuthenticatedUser) -> Result<AvatarUrl, AvatarError> {
        (**self).resolve(user)
    }
}
