//! Shared utilities for the sanctions list crates.
//!
//! Polars cell conversion, null-sentinel detection and the multi-value list
//! delimiter used by every aggregated output column.

pub mod list;
pub mod polars;

pub use list::{LIST_DELIMITER, NULL_SENTINELS, is_null_sentinel, join_list, split_list};
pub use polars::{any_to_i64, any_to_text, format_numeric, parse_i64};
