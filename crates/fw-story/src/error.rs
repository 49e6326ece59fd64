//! Error types for page and sitemap parsing.

/// Error returned when input JSON does not have an expected shape.
///
/// Rendering itself never fails: only parsing the raw document can.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// The text is not JSON, or its top-level shape is not one we accept.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}
