//! Tracing setup. `CHECKLIST_LOG` takes an `EnvFilter` directive and wins
//! over the defaults below.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "CHECKLIST_LOG";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// CLI logging goes to stderr so stdout stays parseable (`--json`).
pub fn init_stderr(verbose: bool) {
    let default = if verbose { "checklist=debug" } else { "checklist=warn" };
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let _ = tracing_subscriber::registry()
        .with(filter(default))
        .with(layer)
        .try_init();
}

/// The TUI owns the terminal, so it logs to a file in the data dir instead.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true);
    let _ = tracing_subscriber::registry()
        .with(filter("checklist=info"))
        .with(layer)
        .try_init();
    tracing::info!(path = %path.display(), "tui tracing initialized");
    Ok(())
}
