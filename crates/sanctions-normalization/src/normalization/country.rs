//! Country and nationality normalization.
//!
//! Two passes run at different points of the pipeline:
//!
//! - [`clean_country_string`] runs per raw cell before aggregation and strips
//!   positional noise: leading bracketed codes, trailing numbered annotations
//!   and trailing punctuation.
//! - [`CountryMap::standardize_list`] runs on aggregated, delimited lists and
//!   maps spelling variants, historical names and adjectival forms to one
//!   canonical name.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use sanctions_common::split_list;

use crate::error::{NormalizationError, Result};

/// Leading `(XX)` codes, the name, then trailing `(123...)` annotations.
static COUNTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\(\w{1,3}\)\s*)*(.*?)(\s*\(\d+\).*)*$").expect("country pattern is valid")
});

/// Canonical names for variants seen in the published list.
const BUILTIN_VARIANTS: [(&str, &str); 21] = [
    ("Russian Federation", "Russia"),
    ("Russian", "Russia"),
    ("RUSSIA", "Russia"),
    ("Belarusian SSR, (now Belarus)", "Belarus"),
    ("Uzbekhistan", "Uzbekistan"),
    ("Ukrainian SSR now Ukraine", "Ukrainian SSR (now Ukraine)"),
    ("Ukrainian SSR (Ukraine)", "Ukrainian SSR (now Ukraine)"),
    ("Ukrainian SSR", "Ukrainian SSR (now Ukraine)"),
    (
        "Kazakh Soviet Socialist Republic (now Kazakhstan)",
        "Kazakh SSR (now Kazakhstan)",
    ),
    ("Kazakh Soviet Socialist Republic", "Kazakh SSR (now Kazakhstan)"),
    ("Kazakh SSR", "Kazakh SSR (now Kazakhstan)"),
    ("Bosnia-Herzegovina", "Bosnia and Herzegovina"),
    ("Uzbek SSR", "Uzbekistan SSR (now Uzbekistan)"),
    ("USSR", "Russia (USSR)"),
    ("United Republic of Tanzania", "Tanzania"),
    ("German", "Germany"),
    ("Democratic People's Republic of Korea", "North Korea"),
    ("DPRK", "North Korea"),
    ("Türkiye", "Turkey"),
    ("United States of America", "United States"),
    ("Guinea-Bissau", "Guinea Bissau"),
];

/// Cleans one raw country cell.
///
/// Returns `None` when nothing is left after cleaning.
///
/// # Examples
///
/// ```
/// use sanctions_normalization::clean_country_string;
///
/// assert_eq!(
///     clean_country_string(Some("(3) Russian Federation (1234)")),
///     Some("Russian Federation".to_string())
/// );
/// assert_eq!(clean_country_string(Some(" . ")), None);
/// ```
pub fn clean_country_string(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let extracted = COUNTRY_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str());
    let cleaned = extracted.trim().trim_end_matches(['.', ',', ' ']);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Lookup table from country-name variants to canonical names.
///
/// Unmapped names pass through unchanged. The table is data: the built-in
/// entries can be extended or overridden at run time with a JSON object of
/// `{"variant": "canonical"}` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryMap {
    entries: BTreeMap<String, String>,
}

impl CountryMap {
    /// The table shipped with the normalizer.
    pub fn builtin() -> Self {
        Self {
            entries: BTreeMap::from_iter(
                BUILTIN_VARIANTS
                    .iter()
                    .map(|(variant, canonical)| ((*variant).to_string(), (*canonical).to_string())),
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(variant, canonical)` pairs, ordered by variant.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(variant, canonical)| (variant.as_str(), canonical.as_str()))
    }

    /// Adds or replaces one mapping.
    pub fn insert(&mut self, variant: impl Into<String>, canonical: impl Into<String>) {
        self.entries.insert(variant.into(), canonical.into());
    }

    /// Merges entries over the current table; later entries win.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.entries.extend(entries);
    }

    /// Merges a JSON object file over the current table.
    ///
    /// Returns the number of entries read from the file.
    pub fn merge_json_file(&mut self, path: &Path) -> Result<usize> {
        let content =
            std::fs::read_to_string(path).map_err(|source| NormalizationError::CountryMapRead {
                path: path.to_path_buf(),
                source,
            })?;
        let overrides: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|e| NormalizationError::CountryMapParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let count = overrides.len();
        self.extend(overrides);
        tracing::debug!(path = %path.display(), entries = count, "Merged country overrides");
        Ok(count)
    }

    /// Canonical name for `name`, or `name` itself when unmapped.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map_or(name, String::as_str)
    }

    /// Standardizes a delimited list of countries.
    ///
    /// Splits on `delimiter`, trims and maps every token, drops empties, then
    /// deduplicates, sorts and rejoins. Returns `None` when no token remains.
    /// Applying it twice gives the same result as applying it once, provided
    /// no canonical name is itself a mapped variant.
    pub fn standardize_list(&self, cell: &str, delimiter: &str) -> Option<String> {
        let standardized: BTreeSet<&str> = split_list(cell, delimiter)
            .map(|token| self.canonical(token))
            .filter(|name| !name.is_empty())
            .collect();
        if standardized.is_empty() {
            return None;
        }
        Some(standardized.into_iter().collect::<Vec<_>>().join(delimiter))
    }
}
