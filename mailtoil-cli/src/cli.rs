//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ClustersCommand, CompletionsCommand, ConnectionStringCommand, InitCommand, QueuesCommand,
    ShowCommand, StorageAccountCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for validating and querying mailtoil configuration.
#[derive(Parser)]
#[command(name = "mailtoil")]
#[command(version, about = "Validate and query mail reconstruction toil configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file to use (defaults to ~/.mailtoil/config.yaml)
    #[arg(long, value_name = "PATH", global = true, env = "MAILTOIL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Print the loaded configuration
    Show(ShowCommand),

    /// Print the service bus connection string for a cluster
    ConnectionString(ConnectionStringCommand),

    /// Print the storage account for a cluster
    StorageAccount(StorageAccountCommand),

    /// List the dead-letter queues to search
    Queues(QueuesCommand),

    /// List configured clusters
    Clusters(ClustersCommand),

    /// Write an example configuration file
    Init(InitCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
