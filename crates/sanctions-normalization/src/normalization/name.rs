//! Display-name construction from title and name parts.

/// Joins the non-empty parts with single spaces.
///
/// Each part is trimmed first. Pass the title followed by `Name 1` through
/// `Name 6`. Returns `None` when every part is missing or blank.
///
/// # Examples
///
/// ```
/// use sanctions_normalization::build_display_name;
///
/// let name = build_display_name([Some("Dr"), None, Some(" Ivan "), Some("Petrov")]);
/// assert_eq!(name.as_deref(), Some("Dr Ivan Petrov"));
/// ```
pub fn build_display_name<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let parts: Vec<&str> = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_missing_and_blank_parts() {
        assert_eq!(
            build_display_name([None, Some("John"), Some("  "), None, Some("Smith")]),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_all_missing() {
        assert_eq!(build_display_name([None, None]), None);
        assert_eq!(build_display_name([Some(""), Some(" ")]), None);
    }

    #[test]
    fn test_interior_spacing_preserved() {
        assert_eq!(
            build_display_name([Some("AL  QAIDA")]),
            Some("AL  QAIDA".to_string())
        );
    }
}
