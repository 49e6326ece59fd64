//! `fw page` command implementation.

use clap::Args;
use fw_client::Upstream;
use fw_story::{RenderLimits, render_page_json};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Page slug, e.g. `welcome-visitors`.
    slug: String,

    #[command(flatten)]
    site: SiteArgs,

    /// Omit the page title.
    #[arg(long)]
    no_title: bool,

    /// Stop after this many story lines.
    #[arg(long)]
    max_lines: Option<usize>,

    /// Stop before exceeding this many characters.
    #[arg(long)]
    max_chars: Option<usize>,
}

impl PageArgs {
    /// Execute the page command.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched or parsed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let limits = self.limits();
        let slug = self.slug.trim().to_owned();
        if slug.is_empty() {
            return Err(CliError::Validation("missing 'slug'".to_owned()));
        }

        let client = self.site.connect()?;
        let raw = client.fetch_page(&slug)?;
        output.result(&render_page_json(&raw, &limits)?)?;
        Ok(())
    }

    /// Render limits from the flags; unbounded where no flag is given.
    fn limits(&self) -> RenderLimits {
        let full = RenderLimits::full(!self.no_title);
        RenderLimits {
            max_lines: self.max_lines.unwrap_or(full.max_lines),
            max_chars: self.max_chars.unwrap_or(full.max_chars),
            ..full
        }
    }
}
