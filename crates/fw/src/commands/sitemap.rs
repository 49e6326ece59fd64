//! `fw sitemap` command implementation.

use clap::Args;
use fw_client::Upstream;
use fw_story::{extract_slugs, slug_listing};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sitemap command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl SitemapArgs {
    /// Execute the sitemap command.
    ///
    /// # Errors
    ///
    /// Returns an error if the sitemap cannot be fetched or parsed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let client = self.site.connect()?;
        let raw = client.fetch_sitemap()?;
        let slugs = extract_slugs(&raw)?;
        output.result(&slug_listing(&slugs))?;
        Ok(())
    }
}
