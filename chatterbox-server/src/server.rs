//! Router assembly and the server entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use chatterbox_core::init_tracing;
use storage::MessageRepository;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::routes::{health_routes, message_routes};
use crate::state::AppState;

/// Builds the full router: health check, message routes, request tracing and CORS.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(message_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|s| s.parse().ok()).collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Main entry: validate config, init logging, open the store, serve until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file, &config.log_level)?;

    info!(
        database_url = %config.database_url,
        addr = %config.socket_addr(),
        "Initializing chatterbox server"
    );

    let repo = MessageRepository::new(&config.database_url)
        .await
        .with_context(|| format!("Open message database at {}", config.database_url))?;
    let router = build_router(AppState::new(Arc::new(repo)), &config);

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("Bind {}", config.socket_addr()))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

