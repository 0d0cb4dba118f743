//! Concrete avatar providers.

mod auth;
mod file_system;
mod gravatar;

pub use auth::AuthAvatar;
pub use file_system::{FileSystemAvatar, DEFAULT_AVATAR_DIR, DEFAULT_AVATAR_PUBLIC_PATH};
pub use gravatar::{GravatarAvatar, DEFAULT_GRAVATAR_URL};
