//! HTTP server exposing federated wiki pages as plain text.
//!
//! Serves, under `/fedwiki`:
//! - `ping`: liveness check
//! - `proxy?url=`: raw pass-through of an upstream JSON document
//! - `sitemap.txt`: page slugs, one per line
//! - `page.txt?slug=`: a full page rendered as plain text
//! - `synopsis.txt?slug=`: the first few lines of a page
//!
//! # Quick Start
//!
//! ```ignore
//! use fw_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         base_url: "http://localhost:3000/".to_owned(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum server (fw-server)
//!                        │
//!                        ├─► text routes ──► fw-story (render / extract)
//!                        │         │
//!                        │         └─► spawn_blocking ──► fw-client ──HTTP──► wiki site
//!                        │
//!                        └─► proxy ──► fw-client ──HTTP──► wiki site
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
#[cfg(test)]
mod mock;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use fw_client::{Upstream, WikiClient};
use fw_story::RenderLimits;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Wiki site base URL.
    pub base_url: String,
    /// Upstream request timeout.
    pub timeout: Duration,
    /// Limits used by `synopsis.txt` when the query omits them.
    pub synopsis: RenderLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
            base_url: "http://localhost:3000/".to_owned(),
            timeout: Duration::from_secs(30),
            synopsis: RenderLimits::synopsis(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let upstream: Arc<dyn Upstream> = Arc::new(WikiClient::new(&config.base_url, config.timeout)?);

    let state = Arc::new(AppState {
        upstream,
        synopsis: config.synopsis,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, base_url = %config.base_url, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from fw config.
#[must_use]
pub fn server_config_from_fw_config(config: &fw_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        base_url: config.wiki.base_url.clone(),
        timeout: config.wiki.timeout(),
        synopsis: RenderLimits {
            include_title: config.synopsis.include_title,
            max_lines: config.synopsis.max_lines,
            max_chars: config.synopsis.max_chars,
        },
    }
}
