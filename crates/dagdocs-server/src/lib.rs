//! HTTP server for dagdocs.
//!
//! Serves a JSON API over both documentation namespaces:
//! - `GET /api/{namespace}/navigation`: sidebar tree
//! - `GET /api/{namespace}/pages`: pages in reading order
//! - `GET /api/{namespace}/pages/{path}`: page content with breadcrumbs,
//!   previous/next links and table of contents
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use dagdocs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         docs_dir: PathBuf::from("contents/docs"),
//!         examples_dir: PathBuf::from("contents/examples"),
//!         version: "1.0.0".to_owned(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use dagdocs_content::FsContentSource;
use dagdocs_site::{Site, builtin_navigators};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Markdown root of the `docs` namespace.
    pub docs_dir: PathBuf,
    /// Markdown root of the `examples` namespace.
    pub examples_dir: PathBuf,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            docs_dir: PathBuf::from("contents/docs"),
            examples_dir: PathBuf::from("contents/examples"),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// Route trees are validated before binding, so a misconfigured tree stops
/// startup instead of surfacing per request.
///
/// # Errors
///
/// Returns an error if a route tree is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let navigators = builtin_navigators()?;

    let site = Site::new(
        navigators,
        Arc::new(FsContentSource::new(config.docs_dir.clone())),
        Arc::new(FsContentSource::new(config.examples_dir.clone())),
    );

    let state = Arc::new(AppState {
        site,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        docs_dir = %config.docs_dir.display(),
        examples_dir = %config.examples_dir.display(),
        "Starting server"
    );

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

/// Create server configuration from dagdocs config.
#[must_use]
pub fn server_config_from_config(config: &dagdocs_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        docs_dir: config.content_resolved.docs_dir.clone(),
        examples_dir: config.content_resolved.examples_dir.clone(),
        version,
    }
}
