//! Error types for upstream access.

/// Error from fetching an upstream document.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request did not complete (connection refused, timeout, etc).
    #[error("HTTP request to {url} failed: {source}")]
    Transport {
        /// Absolute URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: ureq::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Upstream {status} fetching {url}: {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Absolute URL that was requested.
        url: String,
        /// Response body (may contain error details).
        body: String,
    },

    /// The base URL or reference cannot be resolved.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Whether the failure came from the upstream site rather than from
    /// our own configuration.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpResponse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_message() {
        let err = ClientError::HttpResponse {
            status: 404,
            url: "http://localhost:3000/missing.json".to_owned(),
            body: "Not Found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream 404 fetching http://localhost:3000/missing.json: Not Found"
        );
        assert!(err.is_upstream_failure());
    }

    #[test]
    fn test_invalid_url_is_not_upstream_failure() {
        let err = ClientError::InvalidUrl("ftp://x".to_owned());
        assert!(!err.is_upstream_failure());
    }
}
