//! Error types for sanctions list ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the raw list. All of them are fatal.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}; expected UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has a header but no data rows.
    #[error("CSV file has no data rows: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// One or more required columns are absent.
    #[error("required column(s) not found: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Entity identifier missing, negative or not an integer.
    #[error("row {row}: invalid Group ID {value:?}")]
    InvalidGroupId { row: usize, value: Option<String> },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/ConList.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /data/ConList.csv");
    }

    #[test]
    fn test_missing_columns_lists_all() {
        let err = IngestError::MissingColumns {
            columns: vec!["DOB".to_string(), "Regime".to_string()],
        };
        assert_eq!(err.to_string(), "required column(s) not found: DOB, Regime");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("DOB".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
