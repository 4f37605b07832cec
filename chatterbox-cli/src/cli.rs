//! CLI parser and config loading.

use anyhow::Result;
use chatterbox_server::ServerConfig;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chatterbox")]
#[command(about = "Chatterbox message API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (config from env; flags override HOST, PORT, DATABASE_URL).
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short, long)]
        database_url: Option<String>,
    },
}

/// Load ServerConfig from environment, then apply the flags given to `serve`.
pub fn load_config(command: Commands) -> Result<ServerConfig> {
    let Commands::Serve {
        host,
        port,
        database_url,
    } = command;
    Ok(ServerConfig::load()?.with_overrides(host, port, database_url))
}
