//! Critical column presence and null checks.

use polars::prelude::DataFrame;
use sanctions_model::columns::output;

use crate::issue::Issue;

/// Every critical column must exist and hold no nulls.
pub fn check(df: &DataFrame) -> Vec<Issue> {
    let mut issues = Vec::new();
    for column in output::CRITICAL {
        let Ok(series) = df.column(column) else {
            issues.push(Issue::MissingColumn {
                column: column.to_string(),
            });
            continue;
        };
        let null_count = series.null_count() as u64;
        if null_count > 0 {
            issues.push(Issue::CriticalNull {
                column: column.to_string(),
                null_count,
            });
        }
    }
    issues
}
