//! Property-based tests for configuration loading.

use super::loader::ConfigLoader;
use super::schema::{MailToilConfig, StorageAccount};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn cluster_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}"
}

fn connection_string_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "Endpoint=sb://[a-z0-9]{1,12}\\.servicebus\\.windows\\.net/;SharedAccessKey=[A-Za-z0-9+/]{8,20}",
    ]
}

fn storage_account_strategy() -> impl Strategy<Value = StorageAccount> {
    ("[a-z0-9]{3,24}", "[A-Za-z0-9+/]{8,40}={0,2}")
        .prop_map(|(name, key)| StorageAccount::new(name, key))
}

fn config_strategy() -> impl Strategy<Value = MailToilConfig> {
    (
        prop::collection::btree_map(cluster_strategy(), connection_string_strategy(), 0..5),
        prop::collection::vec("[a-z][a-z0-9-]{0,20}", 0..6),
        prop::collection::btree_map(cluster_strategy(), storage_account_strategy(), 0..5),
        "(/[a-z0-9_.-]{1,12}){0,4}",
    )
        .prop_map(|(connection_strings, queues, storage, vault_dir)| {
            MailToilConfig::new(connection_strings, queues, storage, vault_dir)
        })
}

proptest! {
    // Serializing and reloading a configuration preserves every field
    #[test]
    fn yaml_reload_preserves_config(config in config_strategy()) {
        let yaml = ConfigLoader::to_yaml(&config).unwrap();
        let reloaded = ConfigLoader::load_str(&yaml).unwrap();
        prop_assert_eq!(reloaded, config);
    }

    // Lookups succeed exactly for clusters with a non-empty connection string
    #[test]
    fn connection_string_lookup_is_truthiness(
        config in config_strategy(),
        probe in cluster_strategy(),
    ) {
        let configured = config
            .service_bus_connection_strings()
            .get(&probe)
            .filter(|s| !s.is_empty());
        match config.service_bus_connection_string(&probe) {
            Ok(found) => prop_assert_eq!(Some(found), configured.map(String::as_str)),
            Err(err) => {
                prop_assert!(err.is_lookup());
                prop_assert!(configured.is_none());
            }
        }
    }

    // A removed required field always fails, no matter what else is present
    #[test]
    fn missing_required_field_always_fails(
        config in config_strategy(),
        field in prop::sample::select(vec![
            "service_bus_connection_strings",
            "queues",
            "storage_accounts",
            "vault_dir",
        ]),
    ) {
        let mut document = serde_yaml::to_value(&config).unwrap();
        document.as_mapping_mut().unwrap().remove(field);
        let yaml = serde_yaml::to_string(&document).unwrap();

        let err = ConfigLoader::load_str(&yaml).unwrap_err();
        prop_assert!(err.is_validation());
        prop_assert!(err.field_errors().iter().any(|e| e.field == field));
    }
}

#[test]
fn storage_lookup_matches_map() {
    let mut storage = BTreeMap::new();
    storage.insert("west".to_string(), StorageAccount::new("westacct", "k"));
    let config = MailToilConfig::new(BTreeMap::new(), Vec::new(), storage, "/v");

    assert_eq!(config.storage_account("west").unwrap().account_name(), "westacct");
    assert!(config.storage_account("east").is_err());
}
