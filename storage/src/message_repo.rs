//! Message repository: persistence and queries for messages.
//!
//! Uses SqlitePoolManager and MessageRecord. Callers normally go through the
//! [`Repository`] trait; `clear` is only used by the seeding tool.

use async_trait::async_trait;
use chatterbox_core::{BodyUpdate, Message, NewMessage};
use chrono::Utc;
use tracing::{info, instrument};

use crate::error::StorageError;
use crate::models::MessageRecord;
use crate::repository::Repository;
use crate::sqlite_pool::SqlitePoolManager;

const SELECT_COLUMNS: &str = "SELECT id, body, username, created_at FROM messages";

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating database tables if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                body TEXT NOT NULL,
                username TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        info!("Database tables created successfully");
        Ok(())
    }

    /// Deletes every message and returns how many rows were removed.
    pub async fn clear(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM messages")
            .execute(self.pool_manager.pool())
            .await?;

        info!("Deleted {} messages", result.rows_affected());
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Repository for MessageRepository {
    #[instrument(skip(self, message), fields(username = %message.username()))]
    async fn insert(&self, message: &NewMessage) -> Result<Message, StorageError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO messages (body, username, created_at) VALUES (?, ?, ?)",
        )
        .bind(message.body())
        .bind(message.username())
        .bind(created_at)
        .execute(self.pool_manager.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!(message_id = id, "Saved message");

        Ok(Message {
            id,
            body: message.body().to_string(),
            username: message.username().to_string(),
            created_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<Message>, StorageError> {
        let records: Vec<MessageRecord> =
            sqlx::query_as(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))
                .fetch_all(self.pool_manager.pool())
                .await?;

        info!("Retrieved {} messages", records.len());
        Ok(records.into_iter().map(Message::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Message>, StorageError> {
        let record: Option<MessageRecord> =
            sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
                .bind(id)
                .fetch_optional(self.pool_manager.pool())
                .await?;

        Ok(record.map(Message::from))
    }

    #[instrument(skip(self, update))]
    async fn update_body(&self, id: i64, update: &BodyUpdate) -> Result<Message, StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;

        let result = sqlx::query("UPDATE messages SET body = ? WHERE id = ?")
            .bind(update.body())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }

        let record: MessageRecord = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(message_id = id, "Updated message body");
        Ok(record.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;

        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }

        tx.commit().await?;

        info!(message_id = id, "Deleted message");
        Ok(())
    }
}
