//! CLI command implementations.
//!
//! - `validate`: Validate a configuration file
//! - `show`: Print the loaded configuration
//! - `connection_string`: Print a cluster's service bus connection string
//! - `storage_account`: Print a cluster's storage account
//! - `queues`: List the dead-letter queues to search
//! - `clusters`: List configured clusters
//! - `init`: Write an example configuration file
//! - `completions`: Generate shell completion scripts

pub mod clusters;
pub mod completions;
pub mod connection_string;
pub mod init;
pub mod queues;
pub mod show;
pub mod storage_account;
pub mod validate;

pub use clusters::ClustersCommand;
pub use completions::CompletionsCommand;
pub use connection_string::ConnectionStringCommand;
pub use init::InitCommand;
pub use queues::QueuesCommand;
pub use show::ShowCommand;
pub use storage_account::StorageAccountCommand;
pub use validate::ValidateCommand;
