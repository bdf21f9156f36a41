//! Sanctions list ingestion.
//!
//! Loads the raw consolidated list (one row per name variant) into a Polars
//! `DataFrame` with every column typed as text, checks that every column the
//! normalizer reads is present, and extracts typed [`SourceRecord`]s.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sanctions_ingest::{extract_source_records, read_source_table};
//!
//! # fn main() -> sanctions_ingest::Result<()> {
//! // The published list has one banner line above the header row.
//! let df = read_source_table(Path::new("ConList.csv"), 1)?;
//! let records = extract_source_records(&df)?;
//! println!("{} rows", records.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`SourceRecord`]: sanctions_model::SourceRecord

mod csv;
mod error;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_source_table, validate_encoding};

// === Row Extraction ===
pub use records::{check_required_columns, extract_source_records};
