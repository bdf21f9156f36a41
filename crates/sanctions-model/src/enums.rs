//! Type-safe tags for values the raw list carries as free text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-row marker separating the canonical name record from its variants.
///
/// Only the two primary tags take part in canonical-row selection; every
/// other tag (`"Alias"`, `"AKA"`, blank) is kept verbatim as [`AliasType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AliasType {
    /// `"Primary name"`: the designated identity.
    PrimaryName,
    /// `"Primary name variation"`: a spelling of the designated identity.
    PrimaryNameVariation,
    /// Any other tag, including a missing one.
    Other(Option<String>),
}

impl AliasType {
    /// Classifies a raw alias-type cell. Matching is exact, as in the source list.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("Primary name") => Self::PrimaryName,
            Some("Primary name variation") => Self::PrimaryNameVariation,
            other => Self::Other(other.map(str::to_string)),
        }
    }

    /// Priority for canonical-row selection; lower wins.
    pub fn canonical_rank(&self) -> u8 {
        match self {
            Self::PrimaryName => 0,
            Self::PrimaryNameVariation => 1,
            Self::Other(_) => 2,
        }
    }
}

/// How much of a date of birth the source string actually specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DobPrecision {
    /// Day, month and year given (`DD/MM/YYYY`).
    FullDate,
    /// Day given as `00` (`00/MM/YYYY`); stored as the first of the month.
    MonthYearOnly,
    /// Day and month given as `00` (`00/00/YYYY`); stored as January 1.
    YearOnly,
    /// No date of birth in the source cell.
    Missing,
    /// A value was present but matched no accepted pattern.
    UnknownFailed,
}

impl DobPrecision {
    /// Label written to the output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullDate => "Full Date",
            Self::MonthYearOnly => "Month/Year Only",
            Self::YearOnly => "Year Only",
            Self::Missing => "Missing",
            Self::UnknownFailed => "Unknown/Failed",
        }
    }
}

impl fmt::Display for DobPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
