//! Server config: bind address, database, logging, CORS. Loaded from env.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;
use storage::DEFAULT_DATABASE_URL;

/// Server configuration. Defaults apply for every unset variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// DATABASE_URL (`sqlite:` URL or file path)
    pub database_url: String,
    /// HOST
    pub host: String,
    /// PORT
    pub port: u16,
    /// LOG_FILE; empty disables file logging
    pub log_file: String,
    /// LOG_LEVEL, the filter used when RUST_LOG is unset
    pub log_level: String,
    /// CORS_ORIGINS, comma-separated; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: "127.0.0.1".to_string(),
            port: 5555,
            log_file: "logs/chatterbox.log".to_string(),
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", raw))?,
            Err(_) => defaults.port,
        };
        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origins,
        })
    }

    /// Applies command-line overrides on top of env config.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        database_url: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(database_url) = database_url {
            self.database_url = database_url;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is set but empty");
        }
        if !is_valid_host(&self.host) {
            anyhow::bail!("HOST is not an IP address or host name: {:?}", self.host);
        }
        for origin in &self.cors_origins {
            if HeaderValue::from_str(origin).is_err() {
                anyhow::bail!("CORS_ORIGINS contains an invalid origin: {}", origin);
            }
        }
        Ok(())
    }

    /// `host:port`, as passed to the listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Accepts anything `host:port` can be bound from without a DNS lookup deciding validity:
/// IPv4, bracketed IPv6, or a host name of letters, digits, `-` and `.`.
fn is_valid_host(host: &str) -> bool {
    if format!("{}:0", host).parse::<SocketAddr>().is_ok() {
        return true;
    }
    !host.is_empty()
        && !host.starts_with(['-', '.'])
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}
