//! Run configuration passed explicitly into every component.

use chrono::{Datelike, Local};
use sanctions_common::LIST_DELIMITER;

use crate::normalization::CountryMap;

/// Earliest year accepted for a date of birth.
pub const DEFAULT_MIN_DOB_YEAR: i32 = 1900;

/// Format of the listing, designation and last-updated dates in the raw list.
pub const DEFAULT_METADATA_DATE_FORMAT: &str = "%d/%m/%Y";

/// Inclusive range of years accepted when parsing a date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub min: i32,
    pub max: i32,
}

impl YearWindow {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// 1900 through the current local year.
    pub fn up_to_current_year() -> Self {
        Self::new(DEFAULT_MIN_DOB_YEAR, Local::now().year())
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::up_to_current_year()
    }
}

/// Settings shared by the row normalizers, the aggregator and the cleaner.
#[derive(Debug, Clone)]
pub struct NormalizationConfig {
    /// Delimiter between values of a multi-valued cell.
    pub delimiter: String,
    /// Country variant table used by the aggregate-level standardization.
    pub countries: CountryMap,
    /// Accepted date-of-birth years.
    pub dob_years: YearWindow,
    /// `chrono` format of the metadata date columns.
    pub metadata_date_format: String,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            delimiter: LIST_DELIMITER.to_string(),
            countries: CountryMap::builtin(),
            dob_years: YearWindow::default(),
            metadata_date_format: DEFAULT_METADATA_DATE_FORMAT.to_string(),
        }
    }
}

impl NormalizationConfig {
    pub fn with_countries(mut self, countries: CountryMap) -> Self {
        self.countries = countries;
        self
    }

    pub fn with_dob_years(mut self, dob_years: YearWindow) -> Self {
        self.dob_years = dob_years;
        self
    }
}
