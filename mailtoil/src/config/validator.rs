//! Configuration validation.
//!
//! This module walks a parsed YAML document and builds a typed
//! [`MailToilConfig`], collecting every schema violation it finds instead of
//! stopping at the first one.
//!
//! Rules:
//! - the document root must be a mapping (an empty document counts as an
//!   empty mapping)
//! - all four top-level fields are required and may not be null
//! - string fields must be YAML strings; numbers, booleans and collections
//!   are rejected rather than coerced
//! - unknown keys are ignored, both at the top level and inside storage
//!   account entries
//! - storage account `account_name` and `key` must be non-empty

use serde_yaml::{Mapping as YamlMapping, Value};
use std::collections::BTreeMap;

use crate::config::schema::{Mapping, MailToilConfig, StorageAccount};
use crate::error::{Error, Result, ValidationErrors};

const MISSING: &str = "missing data for required field";
const NULL: &str = "field may not be null";
const EMPTY: &str = "must not be empty";

const QUEUES: &str = "queues";
const VAULT_DIR: &str = "vault_dir";
const ACCOUNT_NAME: &str = "account_name";
const KEY: &str = "key";

/// Validates parsed documents and converts them into [`MailToilConfig`].
///
/// # Examples
///
/// ```
/// use mailtoil::config::ConfigValidator;
///
/// let document: serde_yaml::Value = serde_yaml::from_str("queues: []").unwrap();
/// let err = ConfigValidator::validate(&document).unwrap_err();
/// assert_eq!(err.field_errors().len(), 3);
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a parsed document and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] listing every violation if the document
    /// does not match the schema.
    pub fn validate(document: &Value) -> Result<MailToilConfig> {
        let mut errors = ValidationErrors::new();

        let empty = YamlMapping::new();
        let root = match document {
            Value::Mapping(root) => root,
            Value::Null => &empty,
            other => {
                errors.push("(root)", format!("expected a mapping, found {}", kind(other)));
                return Err(Error::Validation(errors));
            }
        };

        let connection_strings = Self::validate_connection_strings(root, &mut errors);
        let queues = Self::validate_queues(root, &mut errors);
        let storage_accounts = Self::validate_storage_accounts(root, &mut errors);
        let vault_dir = required(root, VAULT_DIR, VAULT_DIR, &mut errors)
            .and_then(|value| expect_string(value, VAULT_DIR, &mut errors));

        match (connection_strings, queues, storage_accounts, vault_dir) {
            (Some(connection_strings), Some(queues), Some(storage_accounts), Some(vault_dir))
                if errors.is_empty() =>
            {
                Ok(MailToilConfig::new(
                    connection_strings,
                    queues,
                    storage_accounts,
                    vault_dir,
                ))
            }
            _ => Err(Error::Validation(errors)),
        }
    }

    /// `service_bus_connection_strings`: map of string to string.
    fn validate_connection_strings(
        root: &YamlMapping,
        errors: &mut ValidationErrors,
    ) -> Option<BTreeMap<String, String>> {
        let field = Mapping::ServiceBusConnectionStrings.key();
        let entries = required(root, field, field, errors)
            .and_then(|value| expect_mapping(value, field, errors))?;

        let mut result = BTreeMap::new();
        let mut valid = true;
        for (key, value) in entries {
            let Some(cluster) = expect_key(key, field, errors) else {
                valid = false;
                continue;
            };
            let path = format!("{field}.{cluster}");
            match expect_string(value, &path, errors) {
                Some(connection_string) => {
                    result.insert(cluster, connection_string);
                }
                None => valid = false,
            }
        }

        valid.then_some(result)
    }

    /// `queues`: list of strings, order preserved.
    fn validate_queues(root: &YamlMapping, errors: &mut ValidationErrors) -> Option<Vec<String>> {
        let items = match required(root, QUEUES, QUEUES, errors)? {
            Value::Sequence(items) => items,
            other => {
                errors.push(QUEUES, format!("not a valid list (found {})", kind(other)));
                return None;
            }
        };

        let mut queues = Vec::with_capacity(items.len());
        let mut valid = true;
        for (i, item) in items.iter().enumerate() {
            match expect_string(item, &format!("{QUEUES}[{i}]"), errors) {
                Some(queue) => queues.push(queue),
                None => valid = false,
            }
        }

        valid.then_some(queues)
    }

    /// `storage_accounts`: map of string to `{account_name, key}`.
    fn validate_storage_accounts(
        root: &YamlMapping,
        errors: &mut ValidationErrors,
    ) -> Option<BTreeMap<String, StorageAccount>> {
        let field = Mapping::StorageAccounts.key();
        let entries = required(root, field, field, errors)
            .and_then(|value| expect_mapping(value, field, errors))?;

        let mut result = BTreeMap::new();
        let mut valid = true;
        for (key, value) in entries {
            let Some(cluster) = expect_key(key, field, errors) else {
                valid = false;
                continue;
            };
            let path = format!("{field}.{cluster}");
            match Self::validate_storage_account(value, &path, errors) {
                Some(account) => {
                    result.insert(cluster, account);
                }
                None => valid = false,
            }
        }

        valid.then_some(result)
    }

    /// A single storage account entry.
    fn validate_storage_account(
        value: &Value,
        path: &str,
        errors: &mut ValidationErrors,
    ) -> Option<StorageAccount> {
        let entry = match value {
            Value::Mapping(entry) => entry,
            Value::Null => {
                errors.push(path, NULL);
                return None;
            }
            other => {
                errors.push(path, format!("not a valid mapping (found {})", kind(other)));
                return None;
            }
        };

        let account_name = Self::non_empty_string(entry, path, ACCOUNT_NAME, errors);
        let key = Self::non_empty_string(entry, path, KEY, errors);

        Some(StorageAccount::new(account_name?, key?))
    }

    fn non_empty_string(
        entry: &YamlMapping,
        parent: &str,
        name: &str,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        let path = format!("{parent}.{name}");
        let value = required(entry, name, &path, errors)
            .and_then(|value| expect_string(value, &path, errors))?;

        if value.is_empty() {
            errors.push(path, EMPTY);
            return None;
        }
        Some(value)
    }
}

/// Look up a required field, recording a violation if it is missing or null.
fn required<'a>(
    map: &'a YamlMapping,
    name: &str,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a Value> {
    match map.get(name) {
        None => {
            errors.push(path, MISSING);
            None
        }
        Some(Value::Null) => {
            errors.push(path, NULL);
            None
        }
        Some(value) => Some(value),
    }
}

fn expect_mapping<'a>(
    value: &'a Value,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a YamlMapping> {
    if let Value::Mapping(map) = value {
        Some(map)
    } else {
        errors.push(path, format!("not a valid mapping (found {})", kind(value)));
        None
    }
}

fn expect_string(value: &Value, path: &str, errors: &mut ValidationErrors) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => {
            errors.push(path, NULL);
            None
        }
        other => {
            errors.push(path, format!("not a valid string (found {})", kind(other)));
            None
        }
    }
}

/// Mapping keys must be strings; `1: foo` is rejected rather than coerced.
fn expect_key(key: &Value, path: &str, errors: &mut ValidationErrors) -> Option<String> {
    if let Value::String(s) = key {
        Some(s.clone())
    } else {
        let shown = match key {
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => kind(other).to_string(),
        };
        errors.push(
            format!("{path}.{shown}"),
            format!("key is not a valid string (found {})", kind(key)),
        );
        None
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
