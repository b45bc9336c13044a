//! Command to print the loaded configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, redacted, GlobalOptions, OutputFormat, REDACTED};
use clap::Args;
use mailtoil::{ConfigLoader, MailToilConfig};

/// Print the loaded configuration.
///
/// Connection strings and storage keys are redacted unless `--show-secrets`
/// is given.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print connection strings and storage keys in full
    #[arg(long)]
    pub show_secrets: bool,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loaded = load_configuration(global)?;
        let config = if self.show_secrets {
            loaded
        } else {
            redacted(&loaded)
        };

        match self.format {
            OutputFormat::Text => print!("{}", render_text(&config)),
            OutputFormat::Yaml => print!("{}", ConfigLoader::to_yaml(&config)?),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        }
        Ok(())
    }
}

fn render_text(config: &MailToilConfig) -> String {
    let mut out = format!("Vault directory: {}\n", config.vault_dir().display());

    out.push_str(&format!("Queues ({}):\n", config.queues().len()));
    for queue in config.queues() {
        out.push_str(&format!("  {queue}\n"));
    }

    out.push_str(&format!("Clusters ({}):\n", config.clusters().len()));
    for cluster in config.clusters() {
        out.push_str(&format!("  {cluster}\n"));

        let service_bus = match config.service_bus_connection_strings().get(cluster) {
            Some(value) if value.is_empty() => "(empty)",
            Some(value) => value.as_str(),
            None => "(not configured)",
        };
        out.push_str(&format!("    service bus:     {service_bus}\n"));

        match config.storage_accounts().get(cluster) {
            Some(account) => {
                out.push_str(&format!("    storage account: {}\n", account.account_name()));
                if account.key() != REDACTED {
                    out.push_str(&format!("    storage key:     {}\n", account.key()));
                }
            }
            None => out.push_str("    storage account: (not configured)\n"),
        }
    }
    out
}
