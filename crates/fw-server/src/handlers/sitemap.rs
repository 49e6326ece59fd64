//! Sitemap listing endpoint.

use std::sync::Arc;

use axum::extract::State;
use fw_story::{extract_slugs, slug_listing};
use tracing::{debug, warn};

use crate::error::ServerError;
use crate::handlers::with_upstream;
use crate::state::AppState;

/// Handle GET /fedwiki/sitemap.txt.
///
/// Returns the site's page slugs, one per line.
pub(crate) async fn get_sitemap_text(
    State(state): State<Arc<AppState>>,
) -> Result<String, ServerError> {
    let slugs = with_upstream(&state, |upstream| {
        let raw = upstream.fetch_sitemap()?;
        Ok(extract_slugs(&raw)?)
    })
    .await
    .inspect_err(|e| warn!(endpoint = "sitemap.txt", error = %e, "Request failed"))?;

    debug!(count = slugs.len(), "Listed sitemap slugs");
    Ok(slug_listing(&slugs))
}
