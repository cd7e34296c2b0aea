//! CLI argument definitions using clap derive macros.

use std::io::{self, IsTerminal, Write};

use clap::{ArgAction, Parser, Subcommand};

use bkl_common_log::{LogConfig, LogFormat, LogLevel};

use crate::commands::{CompletionsCommand, WikiCommand};
use crate::config::{vars, ClientArgs};
use crate::error::CliError;

/// Backlog utilities
///
/// A cli application for Backlog utilities.
#[derive(Debug, Parser)]
#[command(
    name = "bkl",
    author,
    version = crate::version::version(),
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Set log level
    #[arg(
        long,
        global = true,
        env = vars::BACKLOG_LOG_LEVEL,
        default_value = "info",
        help = "Set log level (trace, debug, info, warn, error)"
    )]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(
        long,
        global = true,
        env = vars::BACKLOG_LOG_FORMAT,
        default_value = "pretty",
        help = "Log output format (pretty, compact, json)"
    )]
    pub log_format: LogFormat,

    /// Include source locations in log lines
    #[arg(long, global = true, action = ArgAction::SetTrue, hide = true)]
    pub log_source: bool,

    #[command(flatten)]
    pub client: ClientArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Backlog wiki utilities
    Wiki(WikiCommand),

    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsCommand),
}

impl Cli {
    /// Logging configuration derived from the parsed flags.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level,
            format: self.log_format,
            directives: std::env::var(vars::RUST_LOG)
                .ok()
                .filter(|v| !v.trim().is_empty()),
            ansi: io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
            source_location: self.log_source,
        }
    }

    /// Execute the selected command, writing results to `out`.
    pub async fn execute<W: Write>(self, out: &mut W) -> Result<(), CliError> {
        match self.command {
            Command::Wiki(cmd) => cmd.execute(&self.client, out).await,
            Command::Completions(cmd) => cmd.execute(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bkl",
            "wiki",
            "list",
            "--project-key",
            "DOCS",
            "--log-level",
            "debug",
            "--base-url",
            "https://example.backlog.com",
            "--max-jitter-ms",
            "50",
        ])
        .unwrap();

        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.client.base_url.as_deref(), Some("https://example.backlog.com"));
        assert_eq!(cli.client.max_jitter_ms, 50);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Cli::try_parse_from(["bkl", "--log-level", "loud", "wiki", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_jitter_rejected() {
        let result = Cli::try_parse_from([
            "bkl",
            "--max-jitter-ms",
            "0",
            "wiki",
            "list",
            "--project-key",
            "DOCS",
        ]);
        assert!(result.is_err());
    }
}
