//! Binary: load env, clear and fill the messages table at DATABASE_URL.

use anyhow::Context;
use seed_messages::{seed_database, SeedConfig};
use storage::{MessageRepository, DEFAULT_DATABASE_URL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let repo = MessageRepository::new(&database_url)
        .await
        .with_context(|| format!("Open message database at {}", database_url))?;

    let inserted = seed_database(&repo, &SeedConfig::from_env()).await?;
    println!("Seeded {} messages into {}", inserted, database_url);
    Ok(())
}
