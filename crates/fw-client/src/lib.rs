//! Upstream access to a federated wiki site.
//!
//! Provides the [`Upstream`] capability used by the server and CLI: resolve a
//! reference against the configured site base and GET it as JSON.
//! [`WikiClient`] implements it with a blocking `ureq` agent.

mod client;
mod error;
mod url;

pub use client::{SITEMAP_PATH, Upstream, UpstreamResponse, WikiClient};
pub use error::ClientError;
pub use url::resolve_url;
