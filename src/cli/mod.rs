//! CLI module for studentreg
//!
//! Provides command-line interface for:
//! - init: Connect the configured store and create the schema, then exit
//! - serve: Connect the store and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliResult};
