//! Raw pass-through of upstream JSON.
//!
//! Forwards the upstream status and body unchanged. Errors of our own are
//! reported as JSON objects with an `error` field.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::handlers::{require_param, with_upstream};
use crate::state::AppState;

/// Query for GET /fedwiki/proxy.
#[derive(Debug, Deserialize)]
pub(crate) struct ProxyQuery {
    /// Reference resolved against the site base; may be absolute.
    url: Option<String>,
}

/// Handle GET /fedwiki/proxy.
pub(crate) async fn get_proxy(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProxyQuery>,
) -> Response {
    let Ok(url) = require_param(query.url, "url") else {
        return json_error(StatusCode::BAD_REQUEST, "missing 'url' query param");
    };

    match with_upstream(&state, move |upstream| Ok(upstream.get(&url)?)).await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                response.body,
            )
                .into_response()
        }
        Err(e) => {
            warn!(endpoint = "proxy", error = %e, "Request failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("proxy failure: {e}"),
            )
        }
    }
}

/// JSON error body `{"error": message}`.
fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
