//! Configuration file loading.
//!
//! This module reads a YAML configuration file, parses it into a generic
//! value tree and hands it to the [`ConfigValidator`]. Loading is
//! all-or-nothing: no partially populated configuration is ever returned.

use crate::config::schema::MailToilConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Loads and saves mailtoil configuration files.
///
/// # Examples
///
/// ```no_run
/// use mailtoil::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("mailtoil.yaml")).unwrap();
/// for queue in config.queues() {
///     println!("{queue}");
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read,
    /// [`Error::Parse`] if it is not UTF-8 encoded YAML, and [`Error::Validation`] if
    /// it does not match the schema.
    pub fn load_file(path: &Path) -> Result<MailToilConfig> {
        let contents = fs::read(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let document = parse(&contents).map_err(|source| Error::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;

        ConfigValidator::validate(&document)
    }

    /// Load and validate configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is not valid YAML and
    /// [`Error::Validation`] if it does not match the schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailtoil::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load_str(
    ///     "service_bus_connection_strings: {}\nqueues: []\nstorage_accounts: {}\nvault_dir: /v\n",
    /// )
    /// .unwrap();
    /// assert!(config.queues().is_empty());
    /// ```
    pub fn load_str(contents: &str) -> Result<MailToilConfig> {
        let document = parse(contents.as_bytes())
            .map_err(|source| Error::Parse { path: None, source })?;

        ConfigValidator::validate(&document)
    }

    /// Serialize a configuration to YAML.
    ///
    /// The output loads back into an equal configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if serialization fails.
    pub fn to_yaml(config: &MailToilConfig) -> Result<String> {
        serde_yaml::to_string(config).map_err(Error::Serialization)
    }

    /// Write a configuration to a YAML file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_file(config: &MailToilConfig, path: &Path) -> Result<()> {
        let yaml = Self::to_yaml(config)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}

/// Parses YAML and expands `<<` merge keys.
fn parse(contents: &[u8]) -> std::result::Result<Value, serde_yaml::Error> {
    let mut document: Value = serde_yaml::from_slice(contents)?;
    document.apply_merge()?;
    Ok(document)
}

/// Load a configuration file.
///
/// Shorthand for [`ConfigLoader::load_file`].
///
/// # Errors
///
/// See [`ConfigLoader::load_file`].
pub fn load_config(path: impl AsRef<Path>) -> Result<MailToilConfig> {
    ConfigLoader::load_file(path.as_ref())
}
