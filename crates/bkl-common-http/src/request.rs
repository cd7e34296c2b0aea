//! Request helpers for the Backlog REST API.

/// Header names used by the Backlog API.
pub mod headers {
    /// Unix-epoch seconds at which the current rate limit window resets.
    pub const X_RATELIMIT_RESET: &str = "x-ratelimit-reset";
}

/// Query and form parameter names.
pub mod params {
    pub const API_KEY: &str = "apiKey";
    pub const PROJECT_ID_OR_KEY: &str = "projectIdOrKey";
    pub const NAME: &str = "name";
    pub const CONTENT: &str = "content";
}

/// Join a base URL and an API path.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
