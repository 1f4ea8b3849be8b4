//! Tracing subscriber initialization.
//!
//! Layout passes run on the host's UI loop, so logs go to a file rather than
//! stdout. Follow them with `tail -f` in a separate terminal.
//!
//! The layout logs cache rebuilds, invalidations and placement at `debug` and
//! per-pass details at `trace`. `RUST_LOG=loop_layout=trace` shows every pass.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: dependencies at `warn`, this crate at `info`.
pub const DEFAULT_FILTER: &str = "warn,loop_layout=info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Log path does not name a file
    #[error("Log path {0:?} does not name a file")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where the log file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDestination {
    /// Directory created before the appender opens the file.
    pub directory: PathBuf,
    /// File name inside `directory`.
    pub file_name: String,
}

impl LogDestination {
    /// Split `log_path` into a directory and a file name. A bare file name
    /// logs into the current directory.
    pub fn from_path(log_path: &Path) -> Result<Self, LoggingError> {
        let file_name = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

        let directory = match log_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            directory,
            file_name: file_name.to_string(),
        })
    }

    fn create_directory(&self) -> Result<(), LoggingError> {
        std::fs::create_dir_all(&self.directory).map_err(|source| {
            LoggingError::DirectoryCreation {
                path: self.directory.clone(),
                source,
            }
        })
    }
}

/// `RUST_LOG` if it parses, [`DEFAULT_FILTER`] otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Creates the log directory if it doesn't exist.
///
/// # Errors
/// Returns `LoggingError` if the path is unusable, the directory cannot be
/// created, or a subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let destination = LogDestination::from_path(log_path)?;
    destination.create_directory()?;

    let file_appender =
        tracing_appender::rolling::never(&destination.directory, &destination.file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
