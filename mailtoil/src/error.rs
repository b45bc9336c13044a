//! Error types for the mailtoil library.
//!
//! This module provides the error hierarchy for configuration loading and
//! lookup, using `thiserror` for ergonomic error handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::Mapping;

/// Result type alias for operations that may fail with a mailtoil error.
///
/// # Examples
///
/// ```
/// use mailtoil::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("deadletter-queue-1")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the mailtoil library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not well-formed YAML.
    #[error("invalid YAML{}: {source}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Parse {
        /// The file the YAML was read from, if any.
        path: Option<PathBuf>,
        /// The underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but does not match the configuration schema.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A requested cluster is absent (or empty) in a mapping.
    #[error("couldn't find {} for cluster '{cluster}'", mapping.describe())]
    Lookup {
        /// The cluster name that was requested.
        cluster: String,
        /// The mapping that was searched.
        mapping: Mapping,
    },

    /// A configuration file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The path that could not be read.
        path: PathBuf,
        /// The reason the path could not be read.
        reason: String,
    },

    /// Serializing a configuration back to YAML failed.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is a schema validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailtoil::{Error, FieldError, ValidationErrors};
    ///
    /// let err = Error::Validation(ValidationErrors::from(vec![FieldError::new(
    ///     "vault_dir",
    ///     "missing data for required field",
    /// )]));
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if error is a failed cluster lookup.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }

    /// Check if error is a YAML parse failure.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns the individual field violations for a validation error.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors.as_slice(),
            _ => &[],
        }
    }
}

/// A single schema violation at a field path.
///
/// Paths use dots for mapping keys and brackets for sequence indices, e.g.
/// `storage_accounts.cluster-a.key` or `queues[2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Path of the offending field.
    pub field: String,
    /// A description of the violation.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.field, self.message)
    }
}

/// Every violation found while validating one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Returns true if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The recorded violations.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if a violation was recorded for `field`.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Iterates over the recorded violations.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}
