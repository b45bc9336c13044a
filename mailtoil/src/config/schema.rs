//! Configuration schema definitions.
//!
//! This module defines the typed configuration for the mail reconstruction
//! toil tool and the per-cluster accessors used by the host program.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Credentials for one blob storage account.
///
/// The access key is secret material: the `Debug` implementation redacts it.
///
/// # Examples
///
/// ```
/// use mailtoil::StorageAccount;
///
/// let account = StorageAccount::new("mystorageacct", "base64keymaterial");
/// assert_eq!(account.account_name(), "mystorageacct");
/// assert!(!format!("{account:?}").contains("base64keymaterial"));
/// ```
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct StorageAccount {
    account_name: String,
    key: String,
}

impl StorageAccount {
    /// Creates a storage account from a name and access key.
    #[must_use]
    pub fn new(account_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            key: key.into(),
        }
    }

    /// The storage account name.
    #[must_use]
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// The storage account access key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for StorageAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageAccount")
            .field("account_name", &self.account_name)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// The mappings a cluster can be looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// `service_bus_connection_strings`
    ServiceBusConnectionStrings,
    /// `storage_accounts`
    StorageAccounts,
}

impl Mapping {
    /// The configuration key of this mapping.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ServiceBusConnectionStrings => "service_bus_connection_strings",
            Self::StorageAccounts => "storage_accounts",
        }
    }

    /// Human-readable name of a single entry in this mapping.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::ServiceBusConnectionStrings => "service bus connection string",
            Self::StorageAccounts => "storage account",
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values that can be configured but still count as absent on lookup.
///
/// An empty connection string is indistinguishable from a missing cluster.
/// A stored storage account is always present, whatever its fields hold.
trait Present {
    fn is_present(&self) -> bool;
}

impl Present for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Present for StorageAccount {
    fn is_present(&self) -> bool {
        true
    }
}

fn lookup<'a, V: Present>(
    map: &'a BTreeMap<String, V>,
    cluster: &str,
    mapping: Mapping,
) -> Result<&'a V> {
    map.get(cluster)
        .filter(|value| value.is_present())
        .ok_or_else(|| Error::Lookup {
            cluster: cluster.to_string(),
            mapping,
        })
}

/// Complete configuration for the mail reconstruction toil tool.
///
/// Built once by [`ConfigLoader`](crate::config::ConfigLoader) and read-only
/// afterwards.
///
/// # Examples
///
/// ```
/// use mailtoil::MailToilConfig;
///
/// let config = MailToilConfig::example();
/// assert_eq!(
///     config.service_bus_connection_string("cluster-a").unwrap(),
///     "Endpoint=sb://..."
/// );
/// assert!(config.service_bus_connection_string("cluster-b").is_err());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MailToilConfig {
    service_bus_connection_strings: BTreeMap<String, String>,
    queues: Vec<String>,
    storage_accounts: BTreeMap<String, StorageAccount>,
    vault_dir: String,
}

impl MailToilConfig {
    /// Creates a configuration from its four parts.
    #[must_use]
    pub fn new(
        service_bus_connection_strings: BTreeMap<String, String>,
        queues: Vec<String>,
        storage_accounts: BTreeMap<String, StorageAccount>,
        vault_dir: impl Into<String>,
    ) -> Self {
        Self {
            service_bus_connection_strings,
            queues,
            storage_accounts,
            vault_dir: vault_dir.into(),
        }
    }

    /// A sample configuration with a single cluster, `cluster-a`.
    #[must_use]
    pub fn example() -> Self {
        Self::new(
            BTreeMap::from([("cluster-a".to_string(), "Endpoint=sb://...".to_string())]),
            vec![
                "deadletter-queue-1".to_string(),
                "deadletter-queue-2".to_string(),
            ],
            BTreeMap::from([(
                "cluster-a".to_string(),
                StorageAccount::new("mystorageacct", "base64keymaterial"),
            )]),
            "/var/lib/vault",
        )
    }

    /// Get the service bus connection string for a cluster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if the cluster is not configured or its
    /// connection string is empty.
    pub fn service_bus_connection_string(&self, cluster: &str) -> Result<&str> {
        lookup(
            &self.service_bus_connection_strings,
            cluster,
            Mapping::ServiceBusConnectionStrings,
        )
        .map(String::as_str)
    }

    /// Get the storage account for a cluster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if the cluster is not configured.
    pub fn storage_account(&self, cluster: &str) -> Result<&StorageAccount> {
        lookup(&self.storage_accounts, cluster, Mapping::StorageAccounts)
    }

    /// All configured service bus connection strings, keyed by cluster.
    #[must_use]
    pub fn service_bus_connection_strings(&self) -> &BTreeMap<String, String> {
        &self.service_bus_connection_strings
    }

    /// Queue names to search for dead letters, in configured order.
    #[must_use]
    pub fn queues(&self) -> &[String] {
        &self.queues
    }

    /// All configured storage accounts, keyed by cluster.
    #[must_use]
    pub fn storage_accounts(&self) -> &BTreeMap<String, StorageAccount> {
        &self.storage_accounts
    }

    /// Path to the vault directory.
    #[must_use]
    pub fn vault_dir(&self) -> &Path {
        Path::new(&self.vault_dir)
    }

    /// Every cluster named in either mapping, sorted.
    #[must_use]
    pub fn clusters(&self) -> BTreeSet<&str> {
        self.service_bus_connection_strings
            .keys()
            .chain(self.storage_accounts.keys())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cluster_config() -> MailToilConfig {
        MailToilConfig::new(
            BTreeMap::from([
                ("cluster-a".to_string(), "Endpoint=sb://a".to_string()),
                ("cluster-with-empty-string".to_string(), String::new()),
            ]),
            vec!["q2".to_string(), "q1".to_string()],
            BTreeMap::from([
                ("cluster-a".to_string(), StorageAccount::new("acct-a", "key-a")),
                ("cluster-c".to_string(), StorageAccount::new("acct-c", "key-c")),
            ]),
            "/srv/vault",
        )
    }

    #[test]
    fn test_connection_string_found() {
        let config = two_cluster_config();
        assert_eq!(
            config.service_bus_connection_string("cluster-a").unwrap(),
            "Endpoint=sb://a"
        );
    }

    #[test]
    fn test_connection_string_missing_cluster() {
        let config = two_cluster_config();
        let err = config
            .service_bus_connection_string("unknown-cluster")
            .unwrap_err();
        match err {
            Error::Lookup { cluster, mapping } => {
                assert_eq!(cluster, "unknown-cluster");
                assert_eq!(mapping, Mapping::ServiceBusConnectionStrings);
            }
            other => panic!("expected lookup error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_connection_string_is_absent() {
        let config = two_cluster_config();
        let err = config
            .service_bus_connection_string("cluster-with-empty-string")
            .unwrap_err();
        assert!(err.is_lookup());
        assert!(err.to_string().contains("cluster-with-empty-string"));
    }

    #[test]
    fn test_storage_account_found() {
        let config = two_cluster_config();
        let account = config.storage_account("cluster-c").unwrap();
        assert_eq!(account.account_name(), "acct-c");
        assert_eq!(account.key(), "key-c");
    }

    #[test]
    fn test_storage_account_missing_cluster() {
        let config = two_cluster_config();
        let err = config.storage_account("cluster-with-empty-string").unwrap_err();
        assert!(matches!(
            err,
            Error::Lookup {
                mapping: Mapping::StorageAccounts,
                ..
            }
        ));
    }

    #[test]
    fn test_blank_storage_account_is_returned() {
        let config = MailToilConfig::new(
            BTreeMap::new(),
            Vec::new(),
            BTreeMap::from([("blank".to_string(), StorageAccount::new("", ""))]),
            "/srv/vault",
        );
        let account = config.storage_account("blank").unwrap();
        assert_eq!(account.account_name(), "");
        assert_eq!(account.key(), "");
        assert!(config.storage_account("other").unwrap_err().is_lookup());
    }

    #[test]
    fn test_queues_keep_order() {
        let config = two_cluster_config();
        assert_eq!(config.queues(), ["q2".to_string(), "q1".to_string()]);
    }

    #[test]
    fn test_clusters_is_union() {
        let config = two_cluster_config();
        let clusters: Vec<_> = config.clusters().into_iter().collect();
        assert_eq!(
            clusters,
            vec!["cluster-a", "cluster-c", "cluster-with-empty-string"]
        );
    }

    #[test]
    fn test_vault_dir_as_path() {
        let config = two_cluster_config();
        assert_eq!(config.vault_dir(), Path::new("/srv/vault"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = two_cluster_config();
        let debug = format!("{config:?}");
        assert!(debug.contains("acct-a"));
        assert!(!debug.contains("key-a"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_mapping_display() {
        assert_eq!(
            Mapping::ServiceBusConnectionStrings.to_string(),
            "service_bus_connection_strings"
        );
        assert_eq!(Mapping::StorageAccounts.describe(), "storage account");
    }
}
