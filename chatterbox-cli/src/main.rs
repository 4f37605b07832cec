//! chatterbox CLI: run the message API server. Config from env and optional CLI args.

use anyhow::Result;
use chatterbox_cli::{load_config, Cli};
use chatterbox_server::run_server;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.command)?;
    run_server(config).await
}
