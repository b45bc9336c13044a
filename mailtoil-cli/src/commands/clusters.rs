//! Command to list configured clusters.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use mailtoil::MailToilConfig;

/// List every cluster named in the configuration.
///
/// Each line shows the cluster and which of its lookups would succeed.
#[derive(Args)]
pub struct ClustersCommand {
    /// Only list clusters with both a connection string and a storage account
    #[arg(long)]
    pub complete: bool,
}

impl ClustersCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        for line in cluster_lines(&config, self.complete) {
            println!("{line}");
        }
        Ok(())
    }
}

fn cluster_lines(config: &MailToilConfig, complete_only: bool) -> Vec<String> {
    config
        .clusters()
        .into_iter()
        .filter_map(|cluster| {
            let service_bus = config.service_bus_connection_string(cluster).is_ok();
            let storage = config.storage_account(cluster).is_ok();
            if complete_only && !(service_bus && storage) {
                return None;
            }
            Some(format!(
                "{cluster}\tservice_bus={}\tstorage={}",
                yes_no(service_bus),
                yes_no(storage)
            ))
        })
        .collect()
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
