use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::UniqueId;

/// Attribute the authentication provider uses to assert a profile picture.
pub const AVATAR_URL_ATTRIBUTE: &str = "avatar_url";

/// Read-only view of a signed-in chat participant.
///
/// Produced by the authentication layer; avatar providers only borrow it for
/// the duration of a single resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    unique_id: UniqueId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl AuthenticatedUser {
    pub fn new(unique_id: UniqueId) -> Self {
        Self {
            unique_id,
            name: None,
            attributes: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn unique_id(&self) -> &UniqueId {
        &self.unique_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// The avatar URL asserted by the authentication provider, if it is a
    /// non-empty string.
    pub fn avatar_url(&self) -> Option<&str> {
        self.attribute(AVATAR_URL_ATTRIBUTE)
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UniqueId::try_from("abc123").unwrap())
    }

    #[test]
    fn avatar_url_reads_string_attribute() {
        let user = user().with_attribute(AVATAR_URL_ATTRIBUTE, "http://x/y.png");
        assert_eq!(user.avatar_url(), Some("http://x/y.png"));
    }

    #[test]
    fn avatar_url_ignores_empty_and_non_string_values() {
        assert_eq!(user().avatar_url(), None);
        assert_eq!(user().with_attribute(AVATAR_URL_ATTRIBUTE, "").avatar_url(), None);
        assert_eq!(user().with_attribute(AVATAR_URL_ATTRIBUTE, 42).avatar_url(), None);
        assert_eq!(
            user()
                .with_attribute(AVATAR_URL_ATTRIBUTE, Value::Null)
                .avatar_url(),
            None
        );
    }

    #[test]
    fn deserializes_from_auth_payload() {
        let user: AuthenticatedUser = serde_json::from_value(json!({
            "uniqueId": "abc123",
            "name": "Mat",
            "attributes": { "avatar_url": "http://x/y.png", "email": "mat@example.com" }
        }))
        .unwrap();

        assert_eq!(user.unique_id().as_str(), "abc123");
        assert_eq!(user.name(), Some("Mat"));
        assert_eq!(user.avatar_url(), Some("http://x/y.png"));
        assert_eq!(user.attribute("email"), Some(&json!("mat@example.com")));
    }

    #[test]
    fn attributes_default_to_empty() {
        let user: AuthenticatedUser =
            serde_json::from_value(json!({ "uniqueId": "abc123" })).unwrap();

        assert!(user.attributes().is_empty());
        assert_eq!(user.name(), None);
    }

    #[test]
    fn invalid_unique_id_is_rejected_on_deserialize() {
        let result = serde_json::from_value::<AuthenticatedUser>(json!({ "uniqueId": "a/b" }));
        assert!(result.is_err());
    }
}
