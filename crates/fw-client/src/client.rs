//! Blocking HTTP access to the wiki site.

use std::time::Duration;

use tracing::info;
use ureq::Agent;

use crate::error::ClientError;
use crate::url::resolve_url;

/// Sitemap location relative to the site base.
pub const SITEMAP_PATH: &str = "system/sitemap.json";

/// Raw upstream answer, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// Absolute URL that was requested.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl UpstreamResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of wiki JSON documents.
///
/// Implementations perform a single request per call, without retry.
pub trait Upstream: Send + Sync {
    /// GET `path`, resolved against the site base, and return the response
    /// regardless of status.
    fn get(&self, path: &str) -> Result<UpstreamResponse, ClientError>;

    /// GET `path` and return the body of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpResponse`] for non-2xx statuses, plus any
    /// error from [`Upstream::get`].
    fn fetch(&self, path: &str) -> Result<String, ClientError> {
        let response = self.get(path)?;
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ClientError::HttpResponse {
                status: response.status,
                url: response.url,
                body: response.body,
            })
        }
    }

    /// Fetch the JSON of page `slug`.
    fn fetch_page(&self, slug: &str) -> Result<String, ClientError> {
        self.fetch(&format!("{slug}.json"))
    }

    /// Fetch the site's sitemap JSON.
    fn fetch_sitemap(&self) -> Result<String, ClientError> {
        self.fetch(SITEMAP_PATH)
    }
}

/// Wiki site client backed by a `ureq` agent.
pub struct WikiClient {
    agent: Agent,
    base_url: String,
}

impl WikiClient {
    /// Create a client for the site at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is not an `http(s)` URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        // Resolving the empty reference validates the base.
        resolve_url(base_url, "")?;

        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            base_url: base_url.to_owned(),
        })
    }

    /// The configured site base.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the reference cannot be resolved.
    pub fn url(&self, path: &str) -> Result<String, ClientError> {
        resolve_url(&self.base_url, path)
    }
}

impl Upstream for WikiClient {
    fn get(&self, path: &str) -> Result<UpstreamResponse, ClientError> {
        let url = self.url(path)?;
        info!(url = %url, "Fetching upstream document");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();
        let body = if (200..300).contains(&status) {
            body_reader
                .read_to_string()
                .map_err(|source| ClientError::Transport {
                    url: url.clone(),
                    source,
                })?
        } else {
            body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned())
        };

        Ok(UpstreamResponse { url, status, body })
    }
}
