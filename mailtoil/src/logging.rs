//! Logging infrastructure for mailtoil front ends.
//!
//! Configuration loading itself never logs. Hosts such as the CLI use this
//! stderr logger to say which file they loaded and to report failures,
//! one line per schema violation.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Environment variable consulted by [`init_logger`] when no flag is given.
pub const LOG_MODE_ENV: &str = "MAILTOIL_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use mailtoil::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output, including errors.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger filtered by [`LogLevel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message (suppressed only at `Quiet`).
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Logs a warning message (suppressed only at `Quiet`).
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message (`Verbose` only).
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message (`Verbose` only).
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }

    /// Reports a library error.
    ///
    /// Validation failures are expanded so each offending field gets its own
    /// line.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailtoil::{ConfigLoader, LogLevel, Logger};
    ///
    /// let err = ConfigLoader::load_str("queues: []").unwrap_err();
    /// Logger::new(LogLevel::Normal).report(&err);
    /// ```
    pub fn report(&self, error: &Error) {
        for line in report_lines(error) {
            self.error(&line);
        }
    }

    fn emit(&self, threshold: LogLevel, tag: &str, message: &str) {
        if self.level >= threshold {
            eprintln!("{tag}: {message}");
        }
    }
}

fn report_lines(error: &Error) -> Vec<String> {
    match error {
        Error::Validation(errors) => {
            let mut lines = vec![format!(
                "configuration has {} invalid field(s)",
                errors.len()
            )];
            lines.extend(errors.iter().map(|e| format!("  {}: {}", e.field, e.message)));
            lines
        }
        other => vec![other.to_string()],
    }
}

/// Builds a logger from CLI flags, falling back to `MAILTOIL_LOG_MODE`.
///
/// `verbose` wins over `quiet`; an unrecognized environment value is ignored.
///
/// # Examples
///
/// ```
/// use mailtoil::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrors;
    use serial_test::serial;

    /// Sets `MAILTOIL_LOG_MODE` for the duration of a test.
    struct EnvGuard(Option<String>);

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let saved = env::var(LOG_MODE_ENV).ok();
            match value {
                Some(v) => env::set_var(LOG_MODE_ENV, v),
                None => env::remove_var(LOG_MODE_ENV),
            }
            Self(saved)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.0 {
                Some(v) => env::set_var(LOG_MODE_ENV, v),
                None => env::remove_var(LOG_MODE_ENV),
            }
        }
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("quiet".parse::<LogLevel>().unwrap(), LogLevel::Quiet);
        assert_eq!(" Normal ".parse::<LogLevel>().unwrap(), LogLevel::Normal);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_display_round_trips() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_logger_default_is_normal() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_report_lines_expand_validation() {
        let mut errors = ValidationErrors::new();
        errors.push("queues", "missing data for required field");
        errors.push("vault_dir", "field may not be null");

        let lines = report_lines(&Error::Validation(errors));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("2 invalid field(s)"));
        assert_eq!(lines[1], "  queues: missing data for required field");
        assert_eq!(lines[2], "  vault_dir: field may not be null");
    }

    #[test]
    fn test_report_lines_other_errors() {
        let err = Error::Lookup {
            cluster: "cluster-b".to_string(),
            mapping: crate::config::Mapping::StorageAccounts,
        };
        assert_eq!(
            report_lines(&err),
            vec!["couldn't find storage account for cluster 'cluster-b'".to_string()]
        );
    }

    #[test]
    #[serial]
    fn test_init_logger_defaults() {
        let _guard = EnvGuard::set(None);
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        let _guard = EnvGuard::set(Some("verbose"));
        assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_env_invalid_fallback() {
        let _guard = EnvGuard::set(Some("shouty"));
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_flags_override_env() {
        let _guard = EnvGuard::set(Some("verbose"));
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
    }
}
