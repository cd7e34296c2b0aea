//! Transport configuration and HTTP errors.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Transport configuration for the shared HTTP client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Request timeout.
    pub request_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("bkl/{}", env!("CARGO_PKG_VERSION")),
            pool_max_idle_per_host: 10,
        }
    }
}

/// Build a configured HTTP client.
pub fn build_client(config: HttpConfig) -> Result<Client, HttpError> {
    ClientBuilder::new()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .user_agent(&config.user_agent)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .build()
        .map_err(HttpError::ClientBuild)
}

/// HTTP errors.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("failed to discard rate limited response body: {0}")]
    Discard(#[source] reqwest::Error),

    #[error("max retry attempts exceeded: {max_retry_attempts}")]
    MaxRetryAttemptsExceeded { max_retry_attempts: u32 },

    #[error("request body cannot be replayed for retries")]
    UnclonableRequest,

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Request(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("bkl/"));
        assert_eq!(config.pool_max_idle_per_host, 10);
    }

    #[test]
    fn test_build_client() {
        let client = build_client(HttpConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_max_retry_error_carries_budget() {
        let err = HttpError::MaxRetryAttemptsExceeded {
            max_retry_attempts: 5,
        };
        assert_eq!(err.to_string(), "max retry attempts exceeded: 5");
    }
}
