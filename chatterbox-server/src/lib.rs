//! # Chatterbox HTTP server
//!
//! Exposes the message store over `/messages`. Wires [`storage::MessageRepository`] into an axum
//! router, maps domain errors to status codes, and loads configuration from env.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, run_server};
pub use state::AppState;
