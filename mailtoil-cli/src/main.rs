//! Main entry point for the mailtoil CLI.
//!
//! This is the command-line interface for mailtoil configuration files.
//! It provides commands for checking and querying a configuration:
//! - `validate`: Check a file against the schema
//! - `show`: Print the configuration with secrets redacted
//! - `connection-string` / `storage-account`: Per-cluster lookups
//! - `queues` / `clusters`: List what is configured

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        logger: mailtoil::init_logger(cli.verbose, cli.quiet),
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::ConnectionString(cmd) => cmd.execute(&global),
        cli::Command::StorageAccount(cmd) => cmd.execute(&global),
        cli::Command::Queues(cmd) => cmd.execute(&global),
        cli::Command::Clusters(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
