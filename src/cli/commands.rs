//! CLI command implementations
//!
//! Commands load configuration, build the store through the fallback-aware
//! selector, and either exit (init) or hand off to the HTTP server (serve).

use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::http_server::{AppState, HttpServer};
use crate::observability::{Logger, Severity};
use crate::store::{self, StudentStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime_error(e.to_string()))?;

    match cmd {
        Command::Init { config } => runtime.block_on(init(&config)),
        Command::Serve { config, port } => runtime.block_on(serve(&config, port)),
    }
}

/// Initialize the configured storage backend and exit.
///
/// Schema creation is idempotent; running init against an existing
/// database changes nothing.
pub async fn init(config_path: &Path) -> CliResult<()> {
    let config = AppConfig::load(config_path)
        .map_err(|e| CliError::config_error(e.to_string()))?;

    let store = store::connect(&config.database)
        .await
        .map_err(|e| CliError::storage_error(e.to_string()))?;
    store
        .initialize()
        .await
        .map_err(|e| CliError::storage_error(e.to_string()))?;

    Logger::log(Severity::Info, "store_initialized", &[]);
    Ok(())
}

/// Start the registration HTTP server.
pub async fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let config = AppConfig::load(config_path)
        .map_err(|e| CliError::config_error(e.to_string()))?;

    let mut server_config = config.server.clone();
    if let Some(port) = port_override {
        server_config.port = port;
    }

    let store = store::connect(&config.database)
        .await
        .map_err(|e| CliError::storage_error(e.to_string()))?;

    let state = Arc::new(AppState::new(store));
    let server = HttpServer::with_config(server_config, state);

    server
        .start()
        .await
        .map_err(|e| CliError::server_error(e.to_string()))
}
