//! Integration tests for [`storage::MessageRepository`].
//!
//! Covers the insert / list / lookup / update / delete lifecycle using an in-memory SQLite database,
//! plus persistence across reopening a file-backed database.

use chatterbox_core::{BodyUpdate, NewMessage};
use chrono::Utc;
use storage::{MessageRepository, Repository, StorageError};

async fn memory_repo() -> MessageRepository {
    MessageRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

/// **Test: Inserted message has all columns set.**
///
/// **Setup:** Empty in-memory DB.
/// **Action:** `insert(body="Hello 👋", username="Liza")`.
/// **Expected:** Returned message carries the fields, a positive id and a creation timestamp;
/// the row can be read back by id with the same body and username.
#[tokio::test]
async fn test_insert_sets_all_columns() {
    let repo = memory_repo().await;
    let before = Utc::now();

    let created = repo
        .insert(&NewMessage::new("Hello 👋", "Liza"))
        .await
        .expect("Failed to save message");

    assert!(created.id > 0);
    assert_eq!(created.body, "Hello 👋");
    assert_eq!(created.username, "Liza");
    assert!(created.created_at >= before);
    assert!(created.created_at <= Utc::now());

    let stored = repo
        .get_by_id(created.id)
        .await
        .expect("Failed to get message")
        .expect("Message should exist");
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.body, "Hello 👋");
    assert_eq!(stored.username, "Liza");
    assert_eq!(
        stored.created_at.timestamp_millis(),
        created.created_at.timestamp_millis()
    );
}

/// **Test: Get by id when no message has that id.**
///
/// **Setup:** Empty in-memory DB.
/// **Action:** `get_by_id(42)`.
/// **Expected:** Returns `None`.
#[tokio::test]
async fn test_get_by_id_not_found() {
    let repo = memory_repo().await;

    let retrieved = repo.get_by_id(42).await.expect("Failed to query");

    assert!(retrieved.is_none());
}

/// **Test: List returns every row in insertion order.**
///
/// **Setup:** Save 5 messages.
/// **Action:** `list_all()`.
/// **Expected:** 5 messages with strictly increasing ids and bodies in insertion order.
#[tokio::test]
async fn test_list_all_in_insertion_order() {
    let repo = memory_repo().await;

    for i in 0..5 {
        repo.insert(&NewMessage::new(format!("Message {}", i), format!("user{}", i)))
            .await
            .expect("Failed to save message");
    }

    let all = repo.list_all().await.expect("Failed to list messages");

    assert_eq!(all.len(), 5);
    for (i, message) in all.iter().enumerate() {
        assert_eq!(message.body, format!("Message {}", i));
        assert_eq!(message.username, format!("user{}", i));
    }
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

/// **Test: Update changes only the body.**
///
/// **Setup:** Save one message.
/// **Action:** `update_body(id, "Goodbye 👋")`.
/// **Expected:** Returned and stored message have the new body; id, username and created_at unchanged.
#[tokio::test]
async fn test_update_body_changes_only_body() {
    let repo = memory_repo().await;
    let created = repo
        .insert(&NewMessage::new("Hello 👋", "Liza"))
        .await
        .expect("Failed to save message");

    let updated = repo
        .update_body(created.id, &BodyUpdate::new("Goodbye 👋"))
        .await
        .expect("Failed to update message");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.body, "Goodbye 👋");
    assert_eq!(updated.username, "Liza");

    let stored = repo
        .get_by_id(created.id)
        .await
        .expect("Failed to get message")
        .expect("Message should exist");
    assert_eq!(stored.body, "Goodbye 👋");
    assert_eq!(stored.username, "Liza");
    assert_eq!(
        stored.created_at.timestamp_millis(),
        created.created_at.timestamp_millis()
    );
}

/// **Test: Update and delete of a missing id report NotFound and change nothing.**
///
/// **Setup:** Save one message.
/// **Action:** `update_body(missing)`, `delete(missing)`.
/// **Expected:** Both return `StorageError::NotFound(missing)`; the stored message is untouched.
#[tokio::test]
async fn test_missing_id_is_not_found() {
    let repo = memory_repo().await;
    let created = repo
        .insert(&NewMessage::new("Hello 👋", "Liza"))
        .await
        .expect("Failed to save message");
    let missing = created.id + 100;

    let update = repo
        .update_body(missing, &BodyUpdate::new("Goodbye 👋"))
        .await;
    assert!(matches!(update, Err(StorageError::NotFound(id)) if id == missing));

    let delete = repo.delete(missing).await;
    assert!(matches!(delete, Err(StorageError::NotFound(id)) if id == missing));

    let all = repo.list_all().await.expect("Failed to list messages");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].body, "Hello 👋");
}

/// **Test: Delete removes the row.**
///
/// **Setup:** Save two messages.
/// **Action:** `delete(first.id)`.
/// **Expected:** Lookup of the deleted id returns `None`; the other row remains.
#[tokio::test]
async fn test_delete_removes_row() {
    let repo = memory_repo().await;
    let first = repo
        .insert(&NewMessage::new("first", "Liza"))
        .await
        .expect("Failed to save message");
    let second = repo
        .insert(&NewMessage::new("second", "Tester"))
        .await
        .expect("Failed to save message");

    repo.delete(first.id).await.expect("Failed to delete message");

    assert!(repo
        .get_by_id(first.id)
        .await
        .expect("Failed to query")
        .is_none());
    let remaining = repo.list_all().await.expect("Failed to list messages");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

/// **Test: A file-backed database keeps rows across repository instances.**
///
/// **Setup:** Temporary directory; save a message through one repository.
/// **Action:** Open a second repository on the same path.
/// **Expected:** The message is visible with the same id and body.
#[tokio::test]
async fn test_file_database_persists_across_instances() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("chatterbox.db");
    let path = path.to_str().expect("Non-UTF-8 temp path");

    let created = {
        let repo = MessageRepository::new(path)
            .await
            .expect("Failed to create repository");
        repo.insert(&NewMessage::new("persisted", "Liza"))
            .await
            .expect("Failed to save message")
    };

    let reopened = MessageRepository::new(path)
        .await
        .expect("Failed to reopen repository");
    let found = reopened
        .get_by_id(created.id)
        .await
        .expect("Failed to query")
        .expect("Message should exist");

    assert_eq!(found.body, "persisted");
}
