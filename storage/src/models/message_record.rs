//! Message record model for persistence.
//!
//! Maps to the `messages` table and is used by MessageRepository.

use chatterbox_core::Message;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message {
            id: record.id,
            body: record.body,
            username: record.username,
            created_at: record.created_at,
        }
    }
}
