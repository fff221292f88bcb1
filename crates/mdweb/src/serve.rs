//! Server startup from command-line arguments.

use std::path::PathBuf;

use clap::Args;
use mdweb_config::{CliSettings, Config};
use mdweb_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for serving the site.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Host or domain to listen at.
    pub host: String,

    /// Port to listen at.
    pub port: u16,

    /// Path to configuration file (default: auto-discover mdweb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Static folder name under the source directory (overrides config).
    #[arg(long)]
    static_dir: Option<String>,

    /// Static base URL (overrides config).
    #[arg(long)]
    static_url: Option<String>,

    /// Name to exclude from rendering and linking (repeatable).
    #[arg(short, long = "exclude", value_name = "NAME")]
    pub excludes: Vec<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to
    /// start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            static_dir: self.static_dir,
            static_url: self.static_url,
            excludes: self.excludes,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!("Starting server on {}:{}", self.host, self.port));
        output.info(&format!(
            "Source directory: {}",
            config.site_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Static directory: {}",
            config.site_resolved.static_dir_path().display()
        ));
        if config.site_resolved.excludes.is_empty() {
            output.info("Extra excludes: none");
        } else {
            output.info(&format!(
                "Extra excludes: {}",
                config.site_resolved.excludes.join(", ")
            ));
        }

        // Build server config and run
        let server_config =
            server_config_from_config(&config, self.host, self.port, version.to_owned());
        run_server(server_config).await?;

        Ok(())
    }
}
