//! Wiki operation errors.

use bkl_common_http::HttpError;
use thiserror::Error;

/// Errors returned by [`crate::WikiClient`].
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("failed to build request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("failed to {action}: {status}: {message}")]
    Status {
        action: &'static str,
        status: u16,
        message: String,
    },

    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WikiError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether the error came from the network rather than from the server's
    /// answer or the caller's input.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Read(_))
    }
}
