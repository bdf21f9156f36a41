//! Group type against the accepted reference set.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};
use sanctions_common::any_to_text;
use sanctions_model::GroupTypeSet;
use sanctions_model::columns::output;

use crate::issue::Issue;

/// Every non-null `Group_Type` must belong to `accepted`.
pub fn check(df: &DataFrame, accepted: &GroupTypeSet) -> Vec<Issue> {
    let Ok(column) = df.column(output::GROUP_TYPE) else {
        return Vec::new();
    };

    let unexpected: BTreeSet<String> = (0..df.height())
        .filter_map(|idx| any_to_text(column.get(idx).unwrap_or(AnyValue::Null)))
        .filter(|value| !accepted.contains(value))
        .collect();

    if unexpected.is_empty() {
        return Vec::new();
    }
    vec![Issue::UnexpectedGroupType {
        column: output::GROUP_TYPE.to_string(),
        values: unexpected.into_iter().collect(),
        reference_version: accepted.version.clone(),
    }]
}
