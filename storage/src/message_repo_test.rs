//! Unit tests for MessageRepository.
//!
//! Covers insert_parts validation, clear, and in-memory pool sharing.

use crate::error::StorageError;
use crate::message_repo::MessageRepository;
use crate::repository::Repository;
use chatterbox_core::{NewMessage, ValidationError};

#[tokio::test]
async fn test_insert_parts_missing_body_writes_nothing() {
    let repo = MessageRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository");

    let result = repo.insert_parts(None, Some("Liza".to_string())).await;

    assert!(matches!(
        result,
        Err(StorageError::Validation(ValidationError::MissingField("body")))
    ));
    assert!(repo.list_all().await.expect("Failed to list").is_empty());
}

#[tokio::test]
async fn test_insert_parts_missing_username_writes_nothing() {
    let repo = MessageRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository");

    let result = repo.insert_parts(Some("Hello".to_string()), None).await;

    assert!(matches!(
        result,
        Err(StorageError::Validation(ValidationError::MissingField("username")))
    ));
    assert!(repo.list_all().await.expect("Failed to list").is_empty());
}

#[tokio::test]
async fn test_clear_removes_all_rows() {
    let repo = MessageRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository");

    for i in 0..3 {
        repo.insert(&NewMessage::new(format!("Message {}", i), "Tester"))
            .await
            .expect("Failed to save message");
    }

    let removed = repo.clear().await.expect("Failed to clear");

    assert_eq!(removed, 3);
    assert!(repo.list_all().await.expect("Failed to list").is_empty());
}

#[tokio::test]
async fn test_clones_share_in_memory_database() {
    let repo = MessageRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository");
    let other = repo.clone();

    let created = repo
        .insert(&NewMessage::new("shared", "Liza"))
        .await
        .expect("Failed to save message");

    let found = other
        .get_by_id(created.id)
        .await
        .expect("Failed to query");
    assert_eq!(found.map(|m| m.body), Some("shared".to_string()));
}
