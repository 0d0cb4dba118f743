use thiserror::Error;

/// Errors that can occur while resolving a user's avatar.
///
/// Resolution has exactly one failure kind. The cause of a miss (missing
/// attribute, unreadable directory, no matching file) is only visible in
/// trace output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AvatarError {
    #[error("chat: unable to get an avatar URL")]
    NoAvatarUrl,
}
