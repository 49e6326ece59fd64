//! CLI error types.

use fw_client::ClientError;
use fw_config::ConfigError;
use fw_story::StoryError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Story(#[from] StoryError),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),
}
