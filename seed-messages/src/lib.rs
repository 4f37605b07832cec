//! Sample data for the messages table.

mod generate;

pub use generate::{generate_messages, seed_database, SeedConfig};
