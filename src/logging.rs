//! Log setup
//!
//! Events go to `signup.log` in the data directory so they never draw over
//! the TUI. `RUST_LOG` wins over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Settings, SignupPaths};
use crate::error::{SignupError, SignupResult};

/// Build the filter from `RUST_LOG`, falling back to `level`
pub fn env_filter(level: &str) -> SignupResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            SignupError::Config(format!("invalid log level/filter '{}': {}", level, e))
        }),
    }
}

/// Install the global subscriber writing to the log file
pub fn init(paths: &SignupPaths, settings: &Settings) -> SignupResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| SignupError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings.log_level)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| SignupError::Config(format!("Failed to initialize logging: {}", e)))
}
