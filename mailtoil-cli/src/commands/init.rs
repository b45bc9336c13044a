//! Command to write an example configuration file.

use crate::error::CliError;
use crate::utils::{resolve_config_path, GlobalOptions};
use clap::Args;
use mailtoil::{ConfigLoader, MailToilConfig};
use std::fs;
use std::path::PathBuf;

/// Write an example configuration file.
#[derive(Args)]
pub struct InitCommand {
    /// Where to write the file (defaults to --config)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_config_path(self.path.as_deref().or(global.config.as_deref()))?;

        if path.exists() && !self.force {
            return Err(CliError::InvalidArguments(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        ConfigLoader::write_file(&MailToilConfig::example(), &path)?;
        global
            .logger
            .info("Edit the example clusters, queues and vault_dir before use");
        println!("Wrote example configuration to {}", path.display());
        Ok(())
    }
}
