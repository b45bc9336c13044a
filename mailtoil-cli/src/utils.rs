//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command, config
//! path resolution, configuration loading and secret redaction for output.

use crate::error::CliError;
use clap::ValueEnum;
use mailtoil::{load_config, Logger, MailToilConfig, StorageAccount};
use std::path::{Path, PathBuf};

/// Placeholder printed in place of secret material.
pub const REDACTED: &str = "<redacted>";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Logger configured from `--verbose`/`--quiet`/`MAILTOIL_LOG_MODE`.
    pub logger: Logger,

    /// Explicit configuration file, if one was given.
    pub config: Option<PathBuf>,
}

/// Output format for commands that print structured data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// YAML, in the same layout as the configuration file.
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Default configuration location: `~/.mailtoil/config.yaml`.
pub fn default_config_path() -> Result<PathBuf, CliError> {
    home::home_dir()
        .map(|home| home.join(".mailtoil").join("config.yaml"))
        .ok_or_else(|| {
            CliError::Config("could not determine home directory; pass --config".to_string())
        })
}

/// Resolve the configuration path from an explicit value or the default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Load and validate the configuration named by the global options.
pub fn load_configuration(global: &GlobalOptions) -> Result<MailToilConfig, CliError> {
    let path = resolve_config_path(global.config.as_deref())?;
    global
        .logger
        .info(&format!("Loading configuration from {}", path.display()));

    let config = load_config(&path)?;
    global.logger.debug(&format!(
        "Loaded {} cluster(s) and {} queue(s)",
        config.clusters().len(),
        config.queues().len()
    ));
    Ok(config)
}

/// Replace every non-empty connection string and storage key with a placeholder.
pub fn redacted(config: &MailToilConfig) -> MailToilConfig {
    let connection_strings = config
        .service_bus_connection_strings()
        .iter()
        .map(|(cluster, value)| {
            let shown = if value.is_empty() { "" } else { REDACTED };
            (cluster.clone(), shown.to_string())
        })
        .collect();

    let storage_accounts = config
        .storage_accounts()
        .iter()
        .map(|(cluster, account)| {
            (
                cluster.clone(),
                StorageAccount::new(account.account_name(), REDACTED),
            )
        })
        .collect();

    MailToilConfig::new(
        connection_strings,
        config.queues().to_vec(),
        storage_accounts,
        config.vault_dir().to_string_lossy(),
    )
}
