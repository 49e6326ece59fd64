//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/fedwiki/ping", get(handlers::ping))
        .route("/fedwiki/proxy", get(handlers::proxy::get_proxy))
        .route("/fedwiki/sitemap.txt", get(handlers::sitemap::get_sitemap_text))
        .route("/fedwiki/page.txt", get(handlers::pages::get_page_text))
        .route("/fedwiki/synopsis.txt", get(handlers::pages::get_synopsis_text))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer()),
        )
        .with_state(state)
}
