//! Configuration system for mailtoil.
//!
//! A configuration file names, per cluster, the service bus connection
//! string and storage account the toil tool should use, plus the dead-letter
//! queues to search and the vault directory to work in.
//!
//! Loading goes through three steps:
//!
//! 1. Read the file (or take in-memory text)
//! 2. Parse it as YAML into a generic [`serde_yaml::Value`] tree
//! 3. Validate the tree with [`ConfigValidator`], which builds the typed
//!    [`MailToilConfig`] or reports every violation it found
//!
//! # Examples
//!
//! ```
//! use mailtoil::config::ConfigLoader;
//!
//! let yaml = r#"
//! service_bus_connection_strings:
//!   cluster-a: "Endpoint=sb://..."
//! queues:
//!   - "deadletter-queue-1"
//! storage_accounts:
//!   cluster-a:
//!     account_name: "mystorageacct"
//!     key: "base64keymaterial"
//! vault_dir: "/var/lib/vault"
//! "#;
//!
//! let config = ConfigLoader::load_str(yaml).unwrap();
//! assert_eq!(
//!     config.storage_account("cluster-a").unwrap().account_name(),
//!     "mystorageacct"
//! );
//! assert!(config.service_bus_connection_string("cluster-b").is_err());
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use loader::{load_config, ConfigLoader};
pub use schema::{MailToilConfig, Mapping, StorageAccount};
pub use validator::ConfigValidator;
