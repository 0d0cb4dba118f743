use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{AuthenticatedUser, AvatarUrl};
use crate::domain::ports::outbound::AvatarProvider;

/// A message as it is broadcast to everyone in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub name: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub when: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<AvatarUrl>,
}

impl ChatMessage {
    /// Builds an outgoing message for `user`, decorated with whatever avatar
    /// `avatars` resolves. A user without an avatar still gets to talk.
    pub fn compose(
        user: &AuthenticatedUser,
        message: impl Into<String>,
        avatars: &dyn AvatarProvider,
    ) -> Self {
        let name = user
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| user.unique_id().to_string());

        Self {
            name,
            message: message.into(),
            when: OffsetDateTime::now_utc(),
            avatar_url: avatars.resolve(user).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::avatar::{AuthAvatar, GravatarAvatar},
        domain::models::{UniqueId, AVATAR_URL_ATTRIBUTE},
    };
    use serde_json::json;
    use time::macros::datetime;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UniqueId::try_from("abc123").unwrap())
    }

    #[test]
    fn attaches_resolved_avatar() {
        let user = user()
            .with_name("Mat")
            .with_attribute(AVATAR_URL_ATTRIBUTE, "http://x/y.png");

        let message = ChatMessage::compose(&user, "hello", &AuthAvatar);

        assert_eq!(message.name, "Mat");
        assert_eq!(message.message, "hello");
        assert_eq!(message.avatar_url, Some(AvatarUrl::from("http://x/y.png")));
    }

    #[test]
    fn sends_without_avatar_on_miss() {
        let message = ChatMessage::compose(&user(), "hello", &AuthAvatar);

        assert_eq!(message.avatar_url, None);
    }

    #[test]
    fn name_falls_back_to_unique_id() {
        let message = ChatMessage::compose(&user(), "hello", &GravatarAvatar::default());

        assert_eq!(message.name, "abc123");
    }

    #[test]
    fn serializes_for_the_room() {
        let message = ChatMessage {
            name: "Mat".to_string(),
            message: "hello".to_string(),
            when: datetime!(2024-05-01 12:30:00 UTC),
            avatar_url: Some(AvatarUrl::from("/avatars/abc123.png")),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "name": "Mat",
                "message": "hello",
                "when": "2024-05-01T12:30:00Z",
                "avatarUrl": "/avatars/abc123.png"
            })
        );
    }

    #[test]
    fn omits_missing_avatar() {
        let message = ChatMessage {
            name: "Mat".to_string(),
            message: "hello".to_string(),
            when: datetime!(2024-05-01 12:30:00 UTC),
            avatar_url: None,
        };

        let value = serde_json::to_value(&message).unwrap();

        assert!(value.get("avatarUrl").is_none());
    }
}
