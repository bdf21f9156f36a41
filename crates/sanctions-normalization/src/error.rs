//! Error types for normalization and aggregation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while normalizing, aggregating or cleaning.
///
/// Row-level parse problems never surface here; they degrade to labelled
/// values. These variants are fatal for the run.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// Country override file could not be read.
    #[error("failed to read country map {path}: {source}")]
    CountryMapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Country override file is not a JSON object of strings.
    #[error("invalid country map {path}: {message}")]
    CountryMapParse { path: PathBuf, message: String },

    /// Aggregation invariant broken: a group reached the aggregator with no rows.
    #[error("entity group {group_id} has no rows")]
    EmptyGroup { group_id: i64 },

    /// A cleaning pass expected a column that the table does not have.
    #[error("column not found: {column}")]
    MissingColumn { column: String },

    /// Polars DataFrame operation failed.
    #[error("polars error: {0}")]
    PolarsError(#[from] polars::prelude::PolarsError),
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
