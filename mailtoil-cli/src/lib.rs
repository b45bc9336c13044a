//! Library exports for mailtoil-cli.
//!
//! This module exports the CLI structure so the command tree can be
//! inspected from tests and tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
