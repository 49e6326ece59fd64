//! HTTP request handlers.

pub(crate) mod pages;
pub(crate) mod proxy;
pub(crate) mod sitemap;

use std::sync::Arc;

use fw_client::Upstream;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /fedwiki/ping.
pub(crate) async fn ping() -> &'static str {
    "fedwiki ok"
}

/// Run blocking upstream work off the async runtime.
pub(crate) async fn with_upstream<T, F>(state: &AppState, work: F) -> Result<T, ServerError>
where
    T: Send + 'static,
    F: FnOnce(&dyn Upstream) -> Result<T, ServerError> + Send + 'static,
{
    let upstream = Arc::clone(&state.upstream);
    tokio::task::spawn_blocking(move || work(upstream.as_ref()))
        .await
        .map_err(|e| ServerError::Task(e.to_string()))?
}

/// Take a query parameter that must be present and not blank.
pub(crate) fn require_param(
    value: Option<String>,
    name: &'static str,
) -> Result<String, ServerError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ServerError::MissingParameter(name))
}
