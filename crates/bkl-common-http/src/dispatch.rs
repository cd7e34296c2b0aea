//! Rate-limit aware request dispatch.
//!
//! Backlog answers `429 Too Many Requests` once a key exhausts its quota and
//! advertises the end of the window in `X-RateLimit-Reset` (Unix seconds).
//! [`Dispatcher::dispatch`] waits until then, plus a random jitter so that
//! concurrent callers do not retry in lockstep, and resends the request.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Request, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

use crate::client::{build_client, HttpConfig, HttpError};
use crate::request::{endpoint_url, headers, params};

/// Base wait when the reset header is missing, malformed or already past.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(1);

/// Immutable client settings shared by every request.
#[derive(Clone)]
pub struct DispatchConfig {
    base_url: String,
    api_key: String,
    max_retry_attempts: u32,
    max_jitter_millis: NonZeroU64,
}

impl DispatchConfig {
    /// Create a configuration. `max_jitter_millis` is an exclusive upper
    /// bound and must be greater than zero.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        max_retry_attempts: u32,
        max_jitter_millis: u64,
    ) -> Result<Self, HttpError> {
        let max_jitter_millis = NonZeroU64::new(max_jitter_millis).ok_or_else(|| {
            HttpError::InvalidConfig("max jitter must be greater than 0 milliseconds".to_string())
        })?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            max_retry_attempts,
            max_jitter_millis,
        })
    }

    /// Backlog space URL, e.g. `https://example.backlog.com`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key sent with every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Retries allowed after a rate-limited response.
    pub fn max_retry_attempts(&self) -> u32 {
        self.max_retry_attempts
    }

    /// Exclusive upper bound of the jitter added to each wait.
    pub fn max_jitter_millis(&self) -> NonZeroU64 {
        self.max_jitter_millis
    }
}

impl fmt::Debug for DispatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("max_retry_attempts", &self.max_retry_attempts)
            .field("max_jitter_millis", &self.max_jitter_millis)
            .finish()
    }
}

/// Sends requests through a shared client, retrying on `429`.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    config: Arc<DispatchConfig>,
}

impl Dispatcher {
    /// Create a dispatcher with the default transport settings.
    pub fn new(config: DispatchConfig) -> Result<Self, HttpError> {
        Self::with_http_config(config, HttpConfig::default())
    }

    /// Create a dispatcher with custom transport settings.
    pub fn with_http_config(config: DispatchConfig, http: HttpConfig) -> Result<Self, HttpError> {
        let client = build_client(http)?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Settings this dispatcher was created with.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Start a request to `path` under the base URL, authenticated with the
    /// configured API key.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, endpoint_url(self.config.base_url(), path))
            .query(&[(params::API_KEY, self.config.api_key())])
    }

    /// Send `request`, retrying while the server answers `429`.
    ///
    /// Any other status is returned untouched with its body unread. At most
    /// `max_retry_attempts + 1` requests are sent; every `429`, including the
    /// one that exhausts the budget, is waited on before giving up.
    ///
    /// Every attempt, the first included, sends a clone of `request`, so a
    /// request whose body cannot be cloned (a stream) fails with
    /// [`HttpError::UnclonableRequest`] before anything is sent.
    pub async fn dispatch(&self, request: Request) -> Result<Response, HttpError> {
        let mut attempts: u32 = 0;

        loop {
            let attempt = request.try_clone().ok_or(HttpError::UnclonableRequest)?;
            debug!(method = %attempt.method(), path = attempt.url().path(), "sending request");

            let response = self.client.execute(attempt).await?;
            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                debug!(status = %response.status(), "received response");
                return Ok(response);
            }

            let wait = base_wait(response.headers(), Utc::now().timestamp())
                + jitter(self.config.max_jitter_millis);

            // Dropping the drained response hands the connection back to the pool.
            response.bytes().await.map_err(HttpError::Discard)?;

            warn!(
                attempt = attempts + 1,
                wait_ms = wait.as_millis() as u64,
                "rate limited, waiting before retry"
            );
            tokio::time::sleep(wait).await;

            attempts += 1;
            if attempts > self.config.max_retry_attempts {
                return Err(HttpError::MaxRetryAttemptsExceeded {
                    max_retry_attempts: self.config.max_retry_attempts,
                });
            }
        }
    }
}

/// Time to wait before retrying, derived from the reset header and `now`
/// (Unix seconds).
pub(crate) fn base_wait(response_headers: &HeaderMap, now: i64) -> Duration {
    response_headers
        .get(headers::X_RATELIMIT_RESET)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|reset| *reset > now)
        .map(|reset| Duration::from_secs(reset.abs_diff(now)))
        .unwrap_or(DEFAULT_WAIT)
}

/// Uniform random delay in `[0, bound)` milliseconds.
pub(crate) fn jitter(bound: NonZeroU64) -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(0..bound.get()))
}
