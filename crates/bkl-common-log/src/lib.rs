//! Logging infrastructure for bkl.
//!
//! [`build`] turns a [`LogConfig`] into a standalone [`Dispatch`] that the
//! caller owns. The binary installs exactly one of them, after its flags have
//! been parsed, with [`init`].

use std::io;
use std::str::FromStr;

use tracing::Dispatch;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    EnvFilter,
};

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Filter directives (`RUST_LOG` syntax) that replace `level` when set.
    pub directives: Option<String>,
    /// Emit ANSI colors.
    pub ansi: bool,
    /// Include source location.
    pub source_location: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON structured format.
    Json,
}

impl FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(LogError::InvalidFormat(s.to_string())),
        }
    }
}

/// Build a subscriber writing to stderr.
pub fn build(config: &LogConfig) -> Result<Dispatch, LogError> {
    build_with_writer(config, io::stderr)
}

/// Build a subscriber writing to `writer`.
pub fn build_with_writer<W>(config: &LogConfig, writer: W) -> Result<Dispatch, LogError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = match &config.directives {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| LogError::InvalidDirectives(e.to_string()))?,
        None => EnvFilter::new(config.level.as_str()),
    };

    let registry = tracing_subscriber::registry().with(filter);

    let dispatch = match config.format {
        LogFormat::Pretty => Dispatch::new(
            registry.with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(config.ansi)
                    .with_target(true)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            ),
        ),
        LogFormat::Compact => Dispatch::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_ansi(config.ansi)
                    .with_target(false),
            ),
        ),
        LogFormat::Json => Dispatch::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            ),
        ),
    };

    Ok(dispatch)
}

/// Build a stderr subscriber and install it as the global default.
pub fn init(config: &LogConfig) -> Result<(), LogError> {
    let dispatch = build(config)?;
    tracing::dispatcher::set_global_default(dispatch)
        .map_err(|e| LogError::InitError(e.to_string()))
}

/// Logging errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("invalid log format: {0}")]
    InvalidFormat(String),

    #[error("invalid log filter: {0}")]
    InvalidDirectives(String),

    #[error("failed to initialize logging: {0}")]
    InitError(String),
}
