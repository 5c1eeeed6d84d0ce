//! Interactive postal-code lookup.
//!
//! Reads `API_VIACEP_URL` for the service base URL and `RUST_LOG` for the
//! log filter, from the process environment or a `.env` file. Logs go to
//! stderr so they never interleave with the menu.

mod render;
mod shell;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use cep_core::{AddressLookup, Config};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::shell::Shell;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = load_config(None)?;
    debug!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");

    let lookup = AddressLookup::from_config(&config);
    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), lookup);
    shell.run().context("terminal I/O failed")?;
    Ok(())
}

/// Load a `.env` file into the environment, then build `Config` from it.
///
/// Without `dotenv_path` the file is searched from the working directory
/// upward. Variables already set in the environment win over the file.
fn load_config(dotenv_path: Option<&Path>) -> Result<Config> {
    let loaded = match dotenv_path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match loaded {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "ignoring unreadable .env"),
    }
    Config::from_env().context("cannot start without the address service URL")
}
