//! Shell completions.

use std::io::Write;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;

/// Shell completions generation
#[derive(Debug, Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, name, out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut out = Vec::new();
        CompletionsCommand { shell: Shell::Bash }
            .execute(&mut out)
            .unwrap();

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("bkl"));
        assert!(script.contains("rename-all"));
    }
}
