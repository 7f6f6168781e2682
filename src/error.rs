//! Error types for the treedoc export pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Traversal errors. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Failed to walk {root}: {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl WalkError {
    /// Root directory the failing traversal started from.
    pub fn root(&self) -> &std::path::Path {
        match self {
            WalkError::Traversal { root, .. } => root,
        }
    }
}

/// Errors raised while rendering or writing the output document
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to build document package: {0}")]
    Package(#[from] zip::result::ZipError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Top-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("Console output failed: {0}")]
    Console(#[from] std::io::Error),
}

impl From<config::ConfigError> for ExportError {
    fn from(err: config::ConfigError) -> Self {
        ExportError::ConfigError(err.to_string())
    }
}
