//! HTTP server for mdweb.
//!
//! Serves a directory tree of markdown files as a website using axum:
//! - `GET /` and `GET /{*path}` render markdown pages
//! - `GET /robots.txt` serves the robots file from the static folder
//! - the static base path serves raw assets with no markdown processing
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use mdweb_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 5000,
//!         source_dir: PathBuf::from("."),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod state;
mod static_files;
mod template;

use std::path::PathBuf;
use std::sync::Arc;

use mdweb_site::{ExclusionSet, Site, SiteConfig};

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory containing the markdown tree.
    pub source_dir: PathBuf,
    /// Static folder name under the source directory.
    pub static_dir: String,
    /// Static base URL, substituted for the content placeholder and, when
    /// root-relative, served by this process.
    pub static_url: String,
    /// Extra names hidden from rendering and linking.
    pub excludes: Vec<String>,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            source_dir: PathBuf::from("."),
            static_dir: "static".to_owned(),
            static_url: "/static".to_owned(),
            excludes: Vec::new(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails while running.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let excludes =
        ExclusionSet::with_defaults(&config.static_dir, config.excludes.iter().cloned());
    let site = Site::new(SiteConfig {
        source_dir: config.source_dir.clone(),
        static_url: config.static_url.clone(),
        excludes,
    });

    let static_dir = config.source_dir.join(&config.static_dir);
    let state = Arc::new(AppState {
        site,
        static_url: config.static_url.clone(),
        version: config.version.clone(),
    });

    let app = app::create_router(state, &static_dir);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Starting server at http://{}", listener.local_addr()?);

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

/// Create server configuration from an mdweb config.
///
/// # Arguments
///
/// * `config` - Loaded mdweb configuration
/// * `host` - Bind host from the command line
/// * `port` - Bind port from the command line
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(
    config: &mdweb_config::Config,
    host: String,
    port: u16,
    version: String,
) -> ServerConfig {
    ServerConfig {
        host,
        port,
        source_dir: config.site_resolved.source_dir.clone(),
        static_dir: config.site_resolved.static_dir.clone(),
        static_url: config.site_resolved.static_url.clone(),
        excludes: config.site_resolved.excludes.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_matches_site_conventions() {
        let config = ServerConfig::default();

        assert_eq!(config.port, 5000);
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.static_url, "/static");
    }

    #[test]
    fn server_config_from_config_copies_site_settings() {
        let loaded = mdweb_config::Config::default();

        let config = server_config_from_config(
            &loaded,
            "0.0.0.0".to_owned(),
            8080,
            "1.2.3".to_owned(),
        );

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.version, "1.2.3");
    }
}
