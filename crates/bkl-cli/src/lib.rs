//! bkl CLI library
//!
//! Argument definitions, configuration loading and command implementations
//! behind the `bkl` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod version;

pub use error::CliError;
