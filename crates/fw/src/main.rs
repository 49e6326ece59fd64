//! fw CLI - federated wiki plain-text gateway.
//!
//! Provides commands for:
//! - `serve`: Start the HTTP server
//! - `sitemap`: Print the site's page slugs
//! - `page`: Print a page as plain text

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PageArgs, ServeArgs, SitemapArgs};
use output::Output;

/// fw - federated wiki pages as plain text.
#[derive(Parser)]
#[command(name = "fw", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve(ServeArgs),
    /// Print the site's page slugs, one per line.
    Sitemap(SitemapArgs),
    /// Print a page as plain text.
    Page(PageArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute())
        }
        Commands::Sitemap(args) => args.execute(&output),
        Commands::Page(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
