//! Command to print a cluster's service bus connection string.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Print the service bus connection string for a cluster.
///
/// Exits with status 1 if the cluster has no (or an empty) connection string.
#[derive(Args)]
pub struct ConnectionStringCommand {
    /// Cluster name as written in the configuration file
    #[arg(value_name = "CLUSTER")]
    pub cluster: String,
}

impl ConnectionStringCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let connection_string = config.service_bus_connection_string(&self.cluster)?;
        println!("{connection_string}");
        Ok(())
    }
}
