//! Blank strings in key text columns.

use polars::prelude::{DataFrame, DataType};
use sanctions_model::columns::output;

use crate::issue::Issue;

/// Counts non-null values that are empty after trimming.
///
/// Only text-typed columns are inspected.
pub fn check(df: &DataFrame) -> Vec<Issue> {
    let mut issues = Vec::new();
    for name in output::KEY_TEXT {
        let Ok(column) = df.column(name) else {
            continue;
        };
        if column.dtype() != &DataType::String {
            continue;
        }
        let Ok(values) = column.as_materialized_series().str() else {
            continue;
        };
        let empty_count = values
            .into_iter()
            .flatten()
            .filter(|value| value.trim().is_empty())
            .count() as u64;
        if empty_count > 0 {
            issues.push(Issue::EmptyText {
                column: name.to_string(),
                empty_count,
            });
        }
    }
    issues
}
