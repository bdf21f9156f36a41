//! Row-level types: one raw list row and its normalized form.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::enums::{AliasType, DobPrecision};

/// One row of the raw list: a single name variant of a designated entity.
///
/// Text fields hold the raw cell value; blank cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Entity identifier shared by every row describing the same target.
    pub group_id: i64,
    pub alias_type: Option<String>,
    pub group_type: Option<String>,
    pub regime: Option<String>,
    pub title: Option<String>,
    /// `Name 1` through `Name 6`, in order.
    pub name_parts: [Option<String>; 6],
    pub name_non_latin: Option<String>,
    pub dob: Option<String>,
    pub country_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub country: Option<String>,
    /// `Address 1` through `Address 6`, in order.
    pub address_lines: [Option<String>; 6],
    pub post_code: Option<String>,
    pub position: Option<String>,
    pub passport_number: Option<String>,
    pub national_id: Option<String>,
    pub listed_on: Option<String>,
    pub date_designated: Option<String>,
    pub last_updated: Option<String>,
}

impl SourceRecord {
    /// Creates an otherwise empty record for `group_id`.
    pub fn new(group_id: i64) -> Self {
        Self {
            group_id,
            ..Self::default()
        }
    }

    /// Address lines followed by the postal code, in output order.
    pub fn address_fields(&self) -> [Option<&str>; 7] {
        let [a1, a2, a3, a4, a5, a6] = &self.address_lines;
        [
            a1.as_deref(),
            a2.as_deref(),
            a3.as_deref(),
            a4.as_deref(),
            a5.as_deref(),
            a6.as_deref(),
            self.post_code.as_deref(),
        ]
    }
}

/// A parsed date of birth with the precision the source supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDob {
    pub date: Option<NaiveDate>,
    pub precision: DobPrecision,
}

impl ParsedDob {
    pub fn missing() -> Self {
        Self {
            date: None,
            precision: DobPrecision::Missing,
        }
    }

    pub fn failed() -> Self {
        Self {
            date: None,
            precision: DobPrecision::UnknownFailed,
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.date.map(|date| date.year())
    }
}

/// A source row after per-row normalization.
///
/// Country fields hold the row-level cleansed value; everything the
/// aggregation copies verbatim stays on `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub source: SourceRecord,
    pub alias_type: AliasType,
    pub constructed_name: Option<String>,
    pub dob: ParsedDob,
    pub country_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub country: Option<String>,
}

impl NormalizedRecord {
    pub fn group_id(&self) -> i64 {
        self.source.group_id
    }
}
