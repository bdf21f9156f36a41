//! Multi-value reduction shared by every aggregated attribute.

use std::collections::BTreeSet;

use sanctions_common::{is_null_sentinel, join_list};

/// Reduces one attribute's values across a group.
///
/// Drops nulls and null sentinels (`nan`, `none`, `<na>`, `nat` in any case),
/// deduplicates and sorts lexicographically. Returns `None` when nothing is
/// left. The result does not depend on input order.
///
/// # Examples
///
/// ```
/// use sanctions_normalization::aggregate_values;
///
/// let values = [Some("b"), Some("a"), Some("a"), Some("nan"), None];
/// assert_eq!(
///     aggregate_values(values),
///     Some(vec!["a".to_string(), "b".to_string()])
/// );
/// ```
pub fn aggregate_values<I, S>(values: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = values
        .into_iter()
        .flatten()
        .filter(|value| !is_null_sentinel(value.as_ref()))
        .map(|value| value.as_ref().to_string())
        .collect();
    if unique.is_empty() {
        None
    } else {
        Some(unique.into_iter().collect())
    }
}

/// [`aggregate_values`] joined with `delimiter`.
pub fn aggregate_joined<I, S>(values: I, delimiter: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    aggregate_values(values).and_then(|list| join_list(&list, delimiter))
}

/// Distinct values in first-seen order, sentinels dropped.
///
/// Used where position carries meaning (address lines) and sorting would
/// scramble the result.
pub fn distinct_in_order<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = BTreeSet::new();
    values
        .into_iter()
        .flatten()
        .filter(|value| !value.trim().is_empty() && !is_null_sentinel(value))
        .filter(|value| seen.insert(*value))
        .collect()
}
