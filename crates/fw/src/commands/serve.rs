//! `fw serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use fw_config::{CliSettings, Config};
use fw_server::{run_server, server_config_from_fw_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover fw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Wiki site base URL (overrides config).
    #[arg(long, env = "FW_BASE_URL")]
    base_url: Option<String>,

    /// Enable verbose output (log every upstream fetch).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            base_url: self.base_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Wiki site: {}", config.wiki.base_url));
        output.info(&format!(
            "Synopsis: {} lines, {} chars",
            config.synopsis.max_lines, config.synopsis.max_chars
        ));

        run_server(server_config_from_fw_config(&config))
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
