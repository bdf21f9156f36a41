//! The consolidated, one-row-per-entity record.

use serde::{Deserialize, Serialize};

/// One output row per entity identifier.
///
/// Multi-valued fields are already joined with the list delimiter; `None`
/// means no row of the group carried a value. Metadata dates are the raw
/// `DD/MM/YYYY` strings of the canonical row; they become typed dates during
/// post-aggregation cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedEntity {
    pub group_id: i64,
    pub primary_name: Option<String>,
    pub aliases: Option<String>,
    pub primary_name_non_latin: Option<String>,
    pub aliases_non_latin: Option<String>,
    pub group_type: Option<String>,
    pub regime: Option<String>,
    pub dob_raw: Option<String>,
    pub dob_parsed: Option<String>,
    pub dob_year: Option<String>,
    pub dob_precision: Option<String>,
    pub countries_of_birth: Option<String>,
    pub nationalities: Option<String>,
    pub countries_address: Option<String>,
    pub all_associated_countries: Option<String>,
    pub positions: Option<String>,
    pub passport_numbers: Option<String>,
    pub national_ids: Option<String>,
    pub full_address: Option<String>,
    pub listed_on: Option<String>,
    pub date_designated: Option<String>,
    pub last_updated: Option<String>,
}
