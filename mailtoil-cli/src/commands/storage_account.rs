//! Command to print a cluster's storage account.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions, OutputFormat, REDACTED};
use clap::Args;
use serde::Serialize;

/// Print the storage account for a cluster.
#[derive(Args)]
pub struct StorageAccountCommand {
    /// Cluster name as written in the configuration file
    #[arg(value_name = "CLUSTER")]
    pub cluster: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the access key instead of a placeholder
    #[arg(long)]
    pub show_secrets: bool,
}

#[derive(Serialize)]
struct AccountView<'a> {
    cluster: &'a str,
    account_name: &'a str,
    key: &'a str,
}

impl StorageAccountCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let account = config.storage_account(&self.cluster)?;

        let view = AccountView {
            cluster: &self.cluster,
            account_name: account.account_name(),
            key: if self.show_secrets {
                account.key()
            } else {
                REDACTED
            },
        };

        match self.format {
            OutputFormat::Text => {
                println!("account_name: {}", view.account_name);
                println!("key: {}", view.key);
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(&view)
                    .map_err(|e| CliError::from(mailtoil::Error::Serialization(e)))?;
                print!("{yaml}");
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        }
        Ok(())
    }
}
