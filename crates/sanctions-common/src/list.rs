//! Multi-value list handling.
//!
//! Aggregated columns hold several values joined by [`LIST_DELIMITER`]. Raw
//! extracts also carry string tokens that stand for "no value"; those are
//! recognised by [`is_null_sentinel`].

/// Literal delimiter between values of a multi-valued output cell.
pub const LIST_DELIMITER: &str = "; ";

/// Tokens (compared trimmed and lowercase) that represent a missing value.
pub const NULL_SENTINELS: [&str; 4] = ["nan", "none", "<na>", "nat"];

/// Returns true when `value` is a textual stand-in for null.
///
/// # Examples
///
/// ```
/// use sanctions_common::is_null_sentinel;
///
/// assert!(is_null_sentinel("NaN"));
/// assert!(is_null_sentinel(" <NA> "));
/// assert!(!is_null_sentinel("Nana"));
/// ```
pub fn is_null_sentinel(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    NULL_SENTINELS.contains(&lowered.as_str())
}

/// Joins values with `delimiter`, returning `None` for an empty list.
pub fn join_list<S: AsRef<str>>(values: &[S], delimiter: &str) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let parts: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    Some(parts.join(delimiter))
}

/// Splits a delimited cell back into trimmed, non-empty values.
pub fn split_list<'a>(cell: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    cell.split(delimiter)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_case_insensitive() {
        for token in ["nan", "NaN", "None", "NONE", "<NA>", "<na>", "NaT", " nat "] {
            assert!(is_null_sentinel(token), "{token} should be a sentinel");
        }
    }

    #[test]
    fn real_values_are_not_sentinels() {
        assert!(!is_null_sentinel("Nancy"));
        assert!(!is_null_sentinel(""));
        assert!(!is_null_sentinel("N/A"));
    }

    #[test]
    fn join_list_empty_is_none() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(join_list(&empty, LIST_DELIMITER), None);
        assert_eq!(
            join_list(&["a", "b"], LIST_DELIMITER),
            Some("a; b".to_string())
        );
    }

    #[test]
    fn split_list_trims_and_drops_blanks() {
        let values: Vec<&str> = split_list("Russia;  Belarus ; ", LIST_DELIMITER).collect();
        assert_eq!(values, vec!["Russia", "Belarus"]);
    }
}
