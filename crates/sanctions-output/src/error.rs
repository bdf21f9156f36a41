//! Error types for export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created.
    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to sort or write the table.
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("failed to sort table: {0}")]
    Sort(#[source] polars::prelude::PolarsError),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, OutputError>;
