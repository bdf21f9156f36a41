//! Entity identifier uniqueness and type.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};
use sanctions_common::any_to_text;
use sanctions_model::columns::output;

use super::dtype_label;
use crate::issue::Issue;

/// Duplicate samples listed in the message.
const MAX_SAMPLES: usize = 5;

/// `Group ID` values must not repeat. Nulls are left to the presence check.
pub fn check_unique(df: &DataFrame) -> Vec<Issue> {
    let Ok(column) = df.column(output::GROUP_ID) else {
        return Vec::new();
    };

    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    let mut duplicate_count = 0u64;
    for idx in 0..df.height() {
        let Some(key) = any_to_text(column.get(idx).unwrap_or(AnyValue::Null)) else {
            continue;
        };
        if !seen.insert(key.clone()) {
            duplicate_count += 1;
            duplicates.insert(key);
        }
    }

    if duplicate_count == 0 {
        return Vec::new();
    }
    vec![Issue::DuplicateGroupId {
        column: output::GROUP_ID.to_string(),
        duplicate_count,
        samples: duplicates.into_iter().take(MAX_SAMPLES).collect(),
    }]
}

/// `Group ID` must be an integer column.
pub fn check_integer(df: &DataFrame) -> Vec<Issue> {
    let Ok(column) = df.column(output::GROUP_ID) else {
        return Vec::new();
    };
    if column.dtype().is_integer() {
        return Vec::new();
    }
    vec![Issue::NonIntegerGroupId {
        column: output::GROUP_ID.to_string(),
        dtype: dtype_label(column.dtype()),
    }]
}
