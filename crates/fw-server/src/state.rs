//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use fw_client::Upstream;
use fw_story::RenderLimits;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Source of wiki JSON documents.
    pub(crate) upstream: Arc<dyn Upstream>,
    /// Synopsis limits used when a request leaves them out.
    pub(crate) synopsis: RenderLimits,
}
