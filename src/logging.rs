//! Logging setup
//!
//! Structured logging through `tracing`. CLI commands log to stderr; the TUI
//! owns the terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::BudgetError;

static LOGGING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` is not set
const DEFAULT_DIRECTIVE: &str = "budget_setup=info";

/// Where log output goes
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn env_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "budget_setup=debug"
    } else {
        DEFAULT_DIRECTIVE
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Initialize the global subscriber; later calls are no-ops
pub fn init(target: LogTarget<'_>, verbose: bool) -> Result<(), BudgetError> {
    let mut result = Ok(());

    LOGGING_INIT.call_once(|| {
        let filter = env_filter(verbose);
        result = match target {
            LogTarget::Stderr => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| BudgetError::Config(format!("Failed to initialize logging: {}", e))),
            LogTarget::File(path) => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| BudgetError::Io(format!("Failed to open log file: {}", e)))
                .and_then(|file| {
                    fmt()
                        .with_env_filter(filter)
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .try_init()
                        .map_err(|e| {
                            BudgetError::Config(format!("Failed to initialize logging: {}", e))
                        })
                }),
        };
    });

    result
}
