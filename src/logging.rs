//! File logging
//!
//! stdout belongs to the terminal UI, so log events go to a file.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILE_VAR;

/// Errors that can occur while setting up logging
#[derive(Error, Debug)]
pub enum LogError {
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Install a global subscriber appending to `path`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_file_logging(path: &Path) -> Result<(), LogError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LogError::Install(e.to_string()))
}

/// Log to the file named by `SIDENAV_LOG`. Returns false when it is unset.
pub fn init_from_env() -> Result<bool, LogError> {
    match std::env::var_os(LOG_FILE_VAR) {
        Some(path) => init_file_logging(Path::new(&path)).map(|()| true),
        None => Ok(false),
    }
}
