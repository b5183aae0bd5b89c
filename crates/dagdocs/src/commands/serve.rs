//! `dagdocs serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use dagdocs_config::{CliSettings, Config};
use dagdocs_server::{run_server, server_config_from_config};
use dagdocs_site::builtin_navigators;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover dagdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "DAGDOCS_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "DAGDOCS_PORT")]
    port: Option<u16>,

    /// Markdown directory of the docs namespace (overrides config).
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Markdown directory of the examples namespace (overrides config).
    #[arg(long)]
    examples_dir: Option<PathBuf>,

    /// Enable verbose output (request and resolution logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or a route tree is invalid, or the
    /// server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            docs_dir: self.docs_dir,
            examples_dir: self.examples_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Fail before binding if a route tree is misconfigured
        builtin_navigators()?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Docs directory: {}",
            config.content_resolved.docs_dir.display()
        ));
        output.info(&format!(
            "Examples directory: {}",
            config.content_resolved.examples_dir.display()
        ));

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
