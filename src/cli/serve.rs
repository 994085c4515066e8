//! Serve command implementation

use std::path::Path;
use std::process::ExitCode;

use tokio::runtime::Runtime;
use tracing::error;

use crate::config::{resolve_config, CliOverrides};
use crate::logging;
use crate::server;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the serve command
pub fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
    log_level: Option<String>,
) -> ExitCode {
    let overrides = CliOverrides { host, port, log_level };
    let config = match resolve_config(config_path, &overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    logging::init_from_config(&config.logging);

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: Failed to create async runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match rt.block_on(server::serve(&config.server)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
