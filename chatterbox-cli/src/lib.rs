//! # chatterbox-cli
//!
//! Argument parsing and config loading for the `chatterbox` binary.

pub mod cli;

pub use chatterbox_server::ServerConfig;
pub use cli::{load_config, Cli, Commands};
