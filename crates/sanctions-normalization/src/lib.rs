//! Sanctions list normalization.
//!
//! Turns raw list rows into one consolidated record per entity:
//!
//! - **Row passes** ([`executor`]): date-of-birth parsing, country cleansing
//!   and display-name construction, each pure per row
//! - **Aggregation** ([`aggregate`]): grouping by `Group ID`, canonical-row
//!   selection and multi-value reduction
//! - **Table construction** ([`entities_to_frame`]): the aggregated Polars table
//! - **Cleaning** ([`cleaning`]): table-wide passes run after aggregation
//!
//! # Example
//!
//! ```no_run
//! use sanctions_model::SourceRecord;
//! use sanctions_normalization::{
//!     FrameOptions, NormalizationConfig, aggregate_records, clean_table, entities_to_frame,
//!     normalize_records,
//! };
//!
//! # fn main() -> sanctions_normalization::Result<()> {
//! let sources = vec![SourceRecord {
//!     group_id: 7,
//!     alias_type: Some("Primary name".to_string()),
//!     dob: Some("00/00/1950".to_string()),
//!     ..SourceRecord::default()
//! }];
//!
//! let config = NormalizationConfig::default();
//! let records = normalize_records(sources, &config);
//! let entities = aggregate_records(records, &config)?;
//! let mut df = entities_to_frame(&entities, FrameOptions::default())?;
//! let summary = clean_table(&mut df, &config)?;
//! println!("{} entities, {} whitespace fixes", df.height(), summary.whitespace.cells_changed);
//! # Ok(())
//! # }
//! ```
//!
//! All configuration, including the country variant table, is passed in
//! explicitly through [`NormalizationConfig`].

mod config;
mod error;
mod frame;

pub mod aggregate;
pub mod cleaning;
pub mod executor;
pub mod normalization;

// Configuration
pub use config::{DEFAULT_METADATA_DATE_FORMAT, DEFAULT_MIN_DOB_YEAR, NormalizationConfig, YearWindow};

// Error type
pub use error::{NormalizationError, Result};

// Field normalizers
pub use normalization::{CountryMap, build_display_name, clean_country_string, parse_dob};

// Row passes
pub use executor::{DobSummary, build_names, clean_countries, normalize_records, parse_dates, prepare_record};

// Aggregation
pub use aggregate::{
    EntityGroup, aggregate_group, aggregate_joined, aggregate_records, aggregate_values,
    group_records, select_canonical,
};

// Table construction and cleaning
pub use cleaning::{CleaningSummary, DateConversion, PassSummary, clean_table};
pub use frame::{FrameOptions, entities_to_frame, output_columns};
