//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fw_client::ClientError;
use fw_story::StoryError;

/// Server error type.
///
/// Rendered as a `text/plain` body of the form `error: {message}`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A required query parameter is absent or blank.
    #[error("missing '{0}'")]
    MissingParameter(&'static str),

    /// The wiki site could not be reached or answered with an error status.
    #[error("{0}")]
    Upstream(#[from] ClientError),

    /// The wiki site answered with JSON we cannot read.
    #[error("{0}")]
    Malformed(#[from] StoryError),

    /// A blocking upstream task did not complete.
    #[error("task failed: {0}")]
    Task(String),
}

impl ServerError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Malformed(_) => StatusCode::BAD_GATEWAY,
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), format!("error: {self}")).into_response()
    }
}
