//! Client configuration from flags, environment and `.env` files.

use clap::Args;

use bkl_common_http::DispatchConfig;
use bkl_wiki::{WikiClient, DEFAULT_MAX_JITTER_MILLIS, DEFAULT_MAX_RETRY_ATTEMPTS};

use crate::error::CliError;

/// Environment variable names.
pub mod vars {
    pub const BACKLOG_URL: &str = "BACKLOG_URL";
    pub const BACKLOG_API_KEY: &str = "BACKLOG_API_KEY";
    pub const BACKLOG_MAX_RETRY_ATTEMPTS: &str = "BACKLOG_MAX_RETRY_ATTEMPTS";
    pub const BACKLOG_MAX_JITTER_MS: &str = "BACKLOG_MAX_JITTER_MS";
    pub const BACKLOG_LOG_LEVEL: &str = "BACKLOG_LOG_LEVEL";
    pub const BACKLOG_LOG_FORMAT: &str = "BACKLOG_LOG_FORMAT";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Load `.env.local` then `.env` from the working directory.
///
/// Variables that are already set are never overridden, so the process
/// environment wins over `.env.local`, which wins over `.env`.
pub fn load_dotenv() {
    for file in [".env.local", ".env"] {
        if let Err(e) = dotenvy::from_filename(file) {
            if !e.not_found() {
                eprintln!("warning: failed to load {file}: {e}");
            }
        }
    }
}

/// Connection settings shared by every wiki command.
#[derive(Debug, Clone, Args)]
pub struct ClientArgs {
    /// Backlog space URL, e.g. https://example.backlog.com
    #[arg(long, global = true, env = vars::BACKLOG_URL)]
    pub base_url: Option<String>,

    /// Backlog API key
    #[arg(long, global = true, env = vars::BACKLOG_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Retries allowed after a rate-limited response
    #[arg(
        long,
        global = true,
        env = vars::BACKLOG_MAX_RETRY_ATTEMPTS,
        default_value_t = DEFAULT_MAX_RETRY_ATTEMPTS
    )]
    pub max_retry_attempts: u32,

    /// Upper bound (exclusive) of the random delay added to each retry, in milliseconds
    #[arg(
        long,
        global = true,
        env = vars::BACKLOG_MAX_JITTER_MS,
        default_value_t = DEFAULT_MAX_JITTER_MILLIS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_jitter_ms: u64,
}

impl ClientArgs {
    /// Validate the settings into a dispatch configuration.
    pub fn dispatch_config(&self) -> Result<DispatchConfig, CliError> {
        let base_url = non_empty(self.base_url.as_deref()).ok_or_else(|| {
            CliError::config_with_hint(
                "empty URL",
                format!("pass --base-url or set {}", vars::BACKLOG_URL),
            )
        })?;
        let api_key = non_empty(self.api_key.as_deref()).ok_or_else(|| {
            CliError::config_with_hint(
                "empty api key",
                format!("pass --api-key or set {}", vars::BACKLOG_API_KEY),
            )
        })?;

        DispatchConfig::new(base_url, api_key, self.max_retry_attempts, self.max_jitter_ms)
            .map_err(|e| CliError::Wiki(e.into()))
    }

    /// Build a wiki client from the settings.
    pub fn wiki_client(&self) -> Result<WikiClient, CliError> {
        Ok(WikiClient::new(self.dispatch_config()?)?)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
