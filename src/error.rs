//! Error types for the appstate CLI.

use thiserror::Error;

/// Errors surfaced by state commands.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Contradictory or missing arguments.
    #[error("{0}")]
    InvalidUsage(String),

    #[error("{0}")]
    PreconditionFailed(String),

    #[error("{0}")]
    NotFound(String),

    #[error("confirmation did not match, aborted")]
    ConfirmationMismatch,

    /// The operator closed an interactive prompt. Never reported as an error message.
    #[error("User force closed the prompt")]
    OperationCancelled,

    #[error("Failed to read confirmation: {0}")]
    PromptFailed(String),

    #[error("State store error: {0}")]
    StoreError(String),

    #[error("State store request failed: {0}")]
    StoreRequestFailed(String),

    #[error("State store authentication failed: {0}")]
    StoreAuthFailed(String),

    #[error("State store rate limit exceeded: {0}")]
    StoreRateLimit(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ApiError {
    /// True for the prompt cancellation carve-out.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::OperationCancelled)
    }

    /// True for failures reported by the remote state store.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ApiError::StoreError(_)
                | ApiError::StoreRequestFailed(_)
                | ApiError::StoreAuthFailed(_)
                | ApiError::StoreRateLimit(_)
        )
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
