//! In-memory upstream and request helpers for handler tests.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use fw_client::{ClientError, Upstream, UpstreamResponse};
use fw_story::RenderLimits;
use tower::ServiceExt;

use crate::app::create_router;
use crate::state::AppState;

/// Upstream answering from a path → (status, body) table.
///
/// Unknown paths answer 404 `not found`.
pub(crate) struct MockUpstream {
    responses: HashMap<String, (u16, String)>,
    unreachable: bool,
    synopsis: RenderLimits,
}

impl MockUpstream {
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
            unreachable: false,
            synopsis: RenderLimits::synopsis(),
        }
    }

    pub(crate) fn with(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(path.to_owned(), (status, body.to_owned()));
        self
    }

    /// Fail every request at the transport level.
    pub(crate) fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub(crate) fn with_synopsis(mut self, synopsis: RenderLimits) -> Self {
        self.synopsis = synopsis;
        self
    }

    pub(crate) fn into_router(self) -> Router {
        let synopsis = self.synopsis;
        create_router(Arc::new(AppState {
            upstream: Arc::new(self),
            synopsis,
        }))
    }
}

impl Upstream for MockUpstream {
    fn get(&self, path: &str) -> Result<UpstreamResponse, ClientError> {
        let url = format!("http://wiki.test/{path}");
        if self.unreachable {
            return Err(ClientError::Transport {
                url,
                source: ureq::Error::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            });
        }

        let (status, body) = self
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| (404, "not found".to_owned()));
        Ok(UpstreamResponse { url, status, body })
    }
}

/// Send a GET request and collect status, headers and body text.
pub(crate) async fn send(router: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}
