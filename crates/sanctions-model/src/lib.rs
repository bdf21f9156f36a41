//! Data model for the sanctions list normalizer.
//!
//! # Module Organization
//!
//! - [`columns`]: Input and output column names, in file order
//! - [`enums`]: Alias-type tags and date-of-birth precision labels
//! - [`record`]: One raw row and its per-row normalized form
//! - [`entity`]: One consolidated row per entity identifier
//! - [`reference`]: Versioned reference data (accepted group types)

pub mod columns;
pub mod entity;
pub mod enums;
pub mod record;
pub mod reference;

pub use entity::AggregatedEntity;
pub use enums::{AliasType, DobPrecision};
pub use record::{NormalizedRecord, ParsedDob, SourceRecord};
pub use reference::GroupTypeSet;
