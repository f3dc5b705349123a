//! Error Types

use thiserror::Error;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Failures of the outbound chat request
#[derive(Error, Debug)]
pub enum ChatError {
    /// Request never produced a response (refused, DNS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Backend returned status {0}")]
    Status(u16),

    /// Response body was not valid JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// JSON parsed but the `ans` field is missing or not a string
    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),

    /// Endpoint configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChatError {
    /// Check if error is transient
    ///
    /// Nothing retries today; this only classifies failures in logs.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status(500..=599))
    }

    /// Short label used as a structured log field
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
            Self::ResponseShape(_) => "response_shape",
            Self::Config(_) => "config",
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
