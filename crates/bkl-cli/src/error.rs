//! CLI error handling.

use std::io;
use std::process::ExitCode;

use bkl_common_log::LogError;
use bkl_wiki::WikiError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        hint: Option<String>,
    },

    #[error(transparent)]
    Wiki(#[from] WikiError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Numeric process status for this error
    pub fn code(&self) -> u8 {
        match self {
            Self::Config { .. } | Self::Log(_) => 2,
            Self::Io(_) => 3,
            Self::Wiki(e) if e.is_network() => 4,
            Self::Wiki(WikiError::InvalidArgument(_) | WikiError::Pattern(_)) => 5,
            Self::Wiki(_) | Self::Serialize(_) | Self::Other(_) => 1,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::Wiki(WikiError::Pattern(_)) => Some("--pattern takes a regular expression"),
            _ => None,
        }
    }

    /// Create a config error with hint
    pub fn config_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bkl_common_http::HttpError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::config_with_hint("empty URL", "set it").code(), 2);
        assert_eq!(
            CliError::from(WikiError::InvalidArgument("invalid wikiId: 0".into())).code(),
            5
        );
        assert_eq!(CliError::from(WikiError::Http(HttpError::Timeout)).code(), 4);
        assert_eq!(
            CliError::from(WikiError::Status {
                action: "get wiki page",
                status: 404,
                message: String::new(),
            })
            .code(),
            1
        );
    }

    #[test]
    fn test_config_hint() {
        let err = CliError::config_with_hint("empty URL", "set --base-url or BACKLOG_URL");
        assert_eq!(err.to_string(), "empty URL");
        assert_eq!(err.hint(), Some("set --base-url or BACKLOG_URL"));
    }

    #[test]
    fn test_wiki_error_is_transparent() {
        let err = CliError::from(WikiError::InvalidArgument("empty project key".into()));
        assert_eq!(err.to_string(), "empty project key");
        assert_eq!(err.hint(), None);
    }
}
