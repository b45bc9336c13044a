//! Command to list the dead-letter queues to search.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// List queue names, one per line, in configured order.
#[derive(Args)]
pub struct QueuesCommand {}

impl QueuesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        if config.queues().is_empty() {
            global.logger.warn("No queues configured");
        }
        for queue in config.queues() {
            println!("{queue}");
        }
        Ok(())
    }
}
