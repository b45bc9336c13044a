#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # mailtoil
//!
//! Configuration loading for the mail reconstruction dead-letter toil tool.
//!
//! ## Core Types
//!
//! - [`MailToilConfig`] and [`StorageAccount`]: the validated configuration
//! - [`ConfigLoader`] and [`load_config`]: reading YAML files
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: stderr logging for front ends
//!
//! ## Examples
//!
//! ```no_run
//! use mailtoil::load_config;
//!
//! let config = load_config("/etc/mailtoil/config.yaml").unwrap();
//! for queue in config.queues() {
//!     let conn = config.service_bus_connection_string("cluster-a").unwrap();
//!     println!("{queue} via {conn}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{
    load_config, ConfigLoader, ConfigValidator, MailToilConfig, Mapping, StorageAccount,
};
pub use error::{Error, FieldError, Result, ValidationErrors};
pub use logging::{init_logger, LogLevel, Logger};
