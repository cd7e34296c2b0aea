//! bkl - Backlog utilities
//!
//! Main entry point for the `bkl` binary.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use bkl_cli::cli::Cli;
use bkl_cli::config::load_dotenv;
use bkl_cli::CliError;

fn main() -> ExitCode {
    load_dotenv();

    let cli = Cli::parse();

    // The subscriber is built once from the parsed flags and never replaced.
    if let Err(e) = bkl_common_log::init(&cli.log_config()) {
        eprintln!("{e}");
        return CliError::from(e).exit_code();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create Tokio runtime")?;

    runtime.block_on(cli.execute(&mut io::stdout()))
}
