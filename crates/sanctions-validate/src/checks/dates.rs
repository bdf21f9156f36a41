//! Metadata date typing.

use polars::prelude::{DataFrame, DataType};
use sanctions_model::columns::output;

use super::dtype_label;
use crate::issue::Issue;

/// Metadata date columns that are present should be `Date` typed.
pub fn check(df: &DataFrame) -> Vec<Issue> {
    output::METADATA_DATES
        .iter()
        .filter_map(|name| {
            let column = df.column(name).ok()?;
            (column.dtype() != &DataType::Date).then(|| Issue::DateNotTyped {
                column: (*name).to_string(),
                dtype: dtype_label(column.dtype()),
            })
        })
        .collect()
}
