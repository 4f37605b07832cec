//! Generate sample messages (synthetic, deterministic) and write them through the repository.

use anyhow::Result;
use chatterbox_core::NewMessage;
use storage::{MessageRepository, Repository};
use tracing::info;

const USERNAMES: [&str; 5] = ["Liza", "Duane", "Ian", "Kiran", "Tess"];

const BODIES: [&str; 8] = [
    "Hello 👋",
    "Anyone around?",
    "Just pushed the fix, can someone take a look?",
    "Lunch in ten minutes",
    "That build is green again",
    "Who is on call this week?",
    "Thanks!",
    "Goodbye 👋",
];

/// Seeding options; config from env.
/// - SEED_MESSAGES_COUNT: how many messages to insert (default 20)
/// - SEED_KEEP_EXISTING: "1" keeps current rows, anything else clears the table first (default)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub count: usize,
    pub keep_existing: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: 20,
            keep_existing: false,
        }
    }
}

impl SeedConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let count = std::env::var("SEED_MESSAGES_COUNT")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.count);
        let keep_existing = std::env::var("SEED_KEEP_EXISTING")
            .map(|s| s.trim() == "1")
            .unwrap_or(defaults.keep_existing);
        Self {
            count,
            keep_existing,
        }
    }
}

/// Generates `n` messages cycling through fixed usernames and bodies.
pub fn generate_messages(n: usize) -> Vec<NewMessage> {
    (0..n)
        .map(|i| {
            let username = USERNAMES[i % USERNAMES.len()];
            let body = BODIES[i % BODIES.len()];
            NewMessage::new(format!("{} (#{})", body, i + 1), username)
        })
        .collect()
}

/// Optionally clears the table, then inserts generated messages. Returns how many were inserted.
pub async fn seed_database(repo: &MessageRepository, config: &SeedConfig) -> Result<usize> {
    if !config.keep_existing {
        let removed = repo.clear().await?;
        info!(removed, "Cleared existing messages");
    }

    let messages = generate_messages(config.count);
    for message in &messages {
        repo.insert(message).await?;
    }

    info!(inserted = messages.len(), "Seeded messages");
    Ok(messages.len())
}
