//! Core types: the persisted [`Message`] and the validated payloads that create or change one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A stored message. `created_at` serializes as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a message. Only constructible with both fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    body: String,
    username: String,
}

impl NewMessage {
    pub fn new(body: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            username: username.into(),
        }
    }

    /// Validates optional request fields. `body` is checked before `username`.
    pub fn from_parts(
        body: Option<String>,
        username: Option<String>,
    ) -> Result<Self, ValidationError> {
        let body = body.ok_or(ValidationError::MissingField("body"))?;
        let username = username.ok_or(ValidationError::MissingField("username"))?;
        Ok(Self { body, username })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Replacement body for an existing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyUpdate {
    body: String,
}

impl BodyUpdate {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn from_part(body: Option<String>) -> Result<Self, ValidationError> {
        body.map(Self::new)
            .ok_or(ValidationError::MissingField("body"))
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_message_from_parts_requires_body() {
        let err = NewMessage::from_parts(None, Some("Liza".to_string())).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("body"));
    }

    #[test]
    fn test_new_message_from_parts_requires_username() {
        let err = NewMessage::from_parts(Some("Hello 👋".to_string()), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("username"));
    }

    #[test]
    fn test_new_message_from_parts_accepts_empty_strings() {
        let msg = NewMessage::from_parts(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(msg.body(), "");
        assert_eq!(msg.username(), "");
    }

    #[test]
    fn test_body_update_from_part() {
        assert_eq!(
            BodyUpdate::from_part(None).unwrap_err(),
            ValidationError::MissingField("body")
        );
        assert_eq!(
            BodyUpdate::from_part(Some("Goodbye 👋".to_string()))
                .unwrap()
                .body(),
            "Goodbye 👋"
        );
    }

    #[test]
    fn test_message_serializes_with_iso_timestamp() {
        let msg = Message {
            id: 7,
            body: "Hello 👋".to_string(),
            username: "Liza".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["body"], "Hello 👋");
        assert_eq!(json["username"], "Liza");
        assert_eq!(json["created_at"], "2024-03-01T12:30:00Z");
    }
}
