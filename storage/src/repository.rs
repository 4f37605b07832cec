use async_trait::async_trait;
use chatterbox_core::{BodyUpdate, Message, NewMessage};

use crate::error::StorageError;

/// Persistence operations on messages. Every mutating call commits before returning.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn insert(&self, message: &NewMessage) -> Result<Message, StorageError>;
    async fn list_all(&self) -> Result<Vec<Message>, StorageError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Message>, StorageError>;
    /// Fails with [`StorageError::NotFound`] when no row has `id`.
    async fn update_body(&self, id: i64, update: &BodyUpdate) -> Result<Message, StorageError>;
    /// Fails with [`StorageError::NotFound`] when no row has `id`.
    async fn delete(&self, id: i64) -> Result<(), StorageError>;

    /// Validates raw request fields, then inserts.
    async fn insert_parts(
        &self,
        body: Option<String>,
        username: Option<String>,
    ) -> Result<Message, StorageError> {
        let message = NewMessage::from_parts(body, username)?;
        self.insert(&message).await
    }
}
