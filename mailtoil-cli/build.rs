//! Build script for mailtoil-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is mirrored here rather than imported.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("mailtoil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and query mail reconstruction toil configuration")
        .long_about(
            "Command-line tool for validating mailtoil configuration files and looking up \
             per-cluster service bus connection strings and storage accounts",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file to use (defaults to ~/.mailtoil/config.yaml)")
                .value_name("PATH")
                .global(true)
                .env("MAILTOIL_CONFIG"),
        )
        .subcommands(vec![
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a configuration file and report every invalid field"),
            Command::new("show")
                .about("Print the loaded configuration")
                .long_about("Print the configuration as text, YAML or JSON with secrets redacted"),
            Command::new("connection-string")
                .about("Print the service bus connection string for a cluster")
                .long_about("Exit with status 1 if the cluster has no connection string"),
            Command::new("storage-account")
                .about("Print the storage account for a cluster")
                .long_about("Print the account name, and the key with --show-secrets"),
            Command::new("queues")
                .about("List the dead-letter queues to search")
                .long_about("Print queue names one per line in configured order"),
            Command::new("clusters")
                .about("List configured clusters")
                .long_about("List every cluster and which per-cluster lookups succeed"),
            Command::new("init")
                .about("Write an example configuration file")
                .long_about("Write an example configuration to --config or the given path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("mailtoil.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
