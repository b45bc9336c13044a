//! Command to validate a mailtoil configuration file.

use crate::error::CliError;
use crate::utils::{resolve_config_path, GlobalOptions};
use clap::Args;
use mailtoil::ConfigLoader;
use std::path::PathBuf;

/// Validate a mailtoil configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to --config)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_config_path(self.config_path.as_deref().or(global.config.as_deref()))?;

        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        match ConfigLoader::load_file(&path) {
            Ok(config) => {
                global.logger.info(&format!(
                    "{} cluster(s), {} queue(s), vault at {}",
                    config.clusters().len(),
                    config.queues().len(),
                    config.vault_dir().display()
                ));
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) if e.is_parse() || e.is_validation() => {
                global.logger.report(&e);
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }
}
