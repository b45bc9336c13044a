//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "mailtoil";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        let install_hint = match self.shell {
            Shell::Bash => Some("~/.local/share/bash-completion/completions/mailtoil"),
            Shell::Zsh => Some("~/.zsh/completions/_mailtoil"),
            Shell::Fish => Some("~/.config/fish/completions/mailtoil.fish"),
            _ => None,
        };
        if let Some(target) = install_hint {
            global.logger.info(&format!(
                "Install with: mailtoil completions {} > {target}",
                self.shell
            ));
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
