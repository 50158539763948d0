//! CLI argument definitions using clap
//!
//! Commands:
//! - studentreg init --config <path>
//! - studentreg serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// studentreg - student registration service
#[derive(Parser, Debug)]
#[command(name = "studentreg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the configured storage backend (idempotent)
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./studentreg.json")]
        config: PathBuf,
    },

    /// Start the registration HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./studentreg.json")]
        config: PathBuf,

        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
