//! CLI command implementations.

pub(crate) mod page;
pub(crate) mod serve;
pub(crate) mod sitemap;

use std::path::PathBuf;

use clap::Args;
use fw_client::WikiClient;
use fw_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use page::PageArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use sitemap::SitemapArgs;

/// Options shared by commands that read from the wiki site.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover fw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wiki site base URL (overrides config).
    #[arg(long, env = "FW_BASE_URL")]
    base_url: Option<String>,
}

impl SiteArgs {
    /// Load config and build a client for the configured site.
    pub(crate) fn connect(self) -> Result<WikiClient, CliError> {
        let settings = CliSettings {
            base_url: self.base_url,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        Ok(WikiClient::new(
            &config.wiki.base_url,
            config.wiki.timeout(),
        )?)
    }
}
