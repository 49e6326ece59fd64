//! Page text endpoints.
//!
//! Fetch `{slug}.json` from the wiki site and render it as plain text,
//! either in full or as a bounded synopsis.

use std::sync::Arc;

use axum::extract::{Query, State};
use fw_story::{PageDocument, RenderLimits, render_page};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ServerError;
use crate::handlers::{require_param, with_upstream};
use crate::state::AppState;

/// Query for GET /fedwiki/page.txt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageQuery {
    slug: Option<String>,
    /// Defaults to true.
    include_title: Option<bool>,
}

/// Query for GET /fedwiki/synopsis.txt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SynopsisQuery {
    slug: Option<String>,
    max_lines: Option<usize>,
    max_chars: Option<usize>,
    include_title: Option<bool>,
}

impl SynopsisQuery {
    /// Limits from the query, falling back to `defaults` per field.
    fn limits(&self, defaults: RenderLimits) -> RenderLimits {
        RenderLimits {
            include_title: self.include_title.unwrap_or(defaults.include_title),
            max_lines: self.max_lines.unwrap_or(defaults.max_lines),
            max_chars: self.max_chars.unwrap_or(defaults.max_chars),
        }
    }
}

/// Handle GET /fedwiki/page.txt.
pub(crate) async fn get_page_text(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<String, ServerError> {
    let limits = RenderLimits::full(query.include_title.unwrap_or(true));
    render_slug(&state, query.slug, limits, "page.txt").await
}

/// Handle GET /fedwiki/synopsis.txt.
pub(crate) async fn get_synopsis_text(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SynopsisQuery>,
) -> Result<String, ServerError> {
    let limits = query.limits(state.synopsis);
    render_slug(&state, query.slug, limits, "synopsis.txt").await
}

/// Shared implementation for page rendering.
async fn render_slug(
    state: &AppState,
    slug: Option<String>,
    limits: RenderLimits,
    endpoint: &'static str,
) -> Result<String, ServerError> {
    let slug = require_param(slug, "slug")
        .inspect_err(|e| warn!(endpoint, error = %e, "Rejected request"))?;

    let page = with_upstream(state, move |upstream| {
        let raw = upstream.fetch_page(&slug)?;
        Ok(PageDocument::parse(&raw)?)
    })
    .await
    .inspect_err(|e| warn!(endpoint, error = %e, "Request failed"))?;

    let text = render_page(&page, &limits);
    debug!(
        endpoint,
        blocks = page.story.len(),
        chars = text.chars().count(),
        "Rendered page"
    );
    Ok(text)
}
