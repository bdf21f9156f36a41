//! Table-wide passes over the aggregated table.
//!
//! Run in this order, each on the output of the previous one:
//!
//! 1. [`remove_lrm`]: strip U+200E and null out placeholder tokens
//! 2. [`convert_metadata_dates`]: type the metadata date columns
//! 3. [`clean_whitespace`]: trim and collapse interior runs of whitespace
//! 4. [`standardize_country_columns`]: map country variants in aggregated lists
//!
//! Every pass is idempotent.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use regex::Regex;
use sanctions_model::columns::output;

use crate::config::NormalizationConfig;
use crate::error::Result;
use crate::normalization::CountryMap;

/// Left-to-right mark.
pub const LRM: char = '\u{200e}';

/// Cell values nulled by the LRM pass. Compared exactly, after stripping.
const PLACEHOLDER_TOKENS: [&str; 4] = ["", "nan", "None", "<NA>"];

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Columns touched and cells changed by one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub columns: usize,
    pub cells_changed: usize,
}

/// Outcome of typing one metadata date column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateConversion {
    pub column: String,
    pub parsed: usize,
    /// Non-null values that did not parse and became null.
    pub failed: usize,
}

/// Results of every cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningSummary {
    pub lrm: PassSummary,
    pub dates: Vec<DateConversion>,
    pub whitespace: PassSummary,
    pub countries: PassSummary,
}

impl CleaningSummary {
    pub fn failed_dates(&self) -> usize {
        self.dates.iter().map(|conversion| conversion.failed).sum()
    }
}

fn text_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().to_string())
        .collect()
}

/// Rewrites a text column cell by cell. Nulls stay null.
///
/// Returns the number of cells whose value changed.
fn map_text_column<F>(df: &mut DataFrame, name: &str, mut f: F) -> Result<usize>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut changed = 0;
    let values: Vec<Option<String>> = df
        .column(name)?
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|value| {
            let mapped = value.and_then(&mut f);
            if mapped.as_deref() != value {
                changed += 1;
            }
            mapped
        })
        .collect();
    df.with_column(Series::new(name.into(), values))?;
    Ok(changed)
}

fn map_all_text_columns<F>(df: &mut DataFrame, pass: &str, mut f: F) -> Result<PassSummary>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut summary = PassSummary::default();
    for name in text_columns(df) {
        let changed = map_text_column(df, &name, &mut f)?;
        if changed > 0 {
            tracing::debug!(pass, column = %name, changed, "Cleaned column");
        }
        summary.columns += 1;
        summary.cells_changed += changed;
    }
    Ok(summary)
}

/// Strips every left-to-right mark from text cells.
///
/// Values that are empty afterwards, or are exactly `nan`, `None` or `<NA>`,
/// become null.
pub fn remove_lrm(df: &mut DataFrame) -> Result<PassSummary> {
    map_all_text_columns(df, "lrm", |value| {
        let stripped: String = value.chars().filter(|ch| *ch != LRM).collect();
        if PLACEHOLDER_TOKENS.contains(&stripped.as_str()) {
            None
        } else {
            Some(stripped)
        }
    })
}

/// Parses one metadata date.
///
/// chrono reads `%Y` at any width, so when the format has a `%Y` the value
/// must also carry the year as a run of exactly four digits.
fn parse_metadata_date(value: &str, format: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, format).ok()?;
    if !format.contains("%Y") {
        return Some(date);
    }
    let year = format!("{:04}", date.year());
    value
        .split(|ch: char| !ch.is_ascii_digit())
        .any(|run| run == year)
        .then_some(date)
}

/// Parses the metadata date columns into `Date` columns.
///
/// Values that do not match `format` become null; the count is logged at
/// warn level and returned. Columns that are absent are skipped; columns
/// already typed as dates are left alone.
pub fn convert_metadata_dates(df: &mut DataFrame, format: &str) -> Result<Vec<DateConversion>> {
    let mut conversions = Vec::new();
    for name in output::METADATA_DATES {
        let Ok(column) = df.column(name) else {
            tracing::debug!(column = name, "Metadata date column not present");
            continue;
        };
        if column.dtype() != &DataType::String {
            continue;
        }

        let mut parsed = 0;
        let mut failed = 0;
        let days: Vec<Option<i32>> = column
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|value| {
                let value = value?;
                match parse_metadata_date(value.trim(), format) {
                    Some(date) => {
                        parsed += 1;
                        Some(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
                    }
                    None => {
                        failed += 1;
                        None
                    }
                }
            })
            .collect();

        let dates = Series::new(name.into(), days).cast(&DataType::Date)?;
        df.with_column(dates)?;

        if failed > 0 {
            tracing::warn!(column = name, failed, "Metadata dates failed to parse; set to null");
        }
        conversions.push(DateConversion {
            column: name.to_string(),
            parsed,
            failed,
        });
    }
    Ok(conversions)
}

/// Trims text cells and collapses runs of two or more whitespace characters
/// into one space. Blank results become null.
pub fn clean_whitespace(df: &mut DataFrame) -> Result<PassSummary> {
    map_all_text_columns(df, "whitespace", |value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(WHITESPACE_RUN.replace_all(trimmed, " ").into_owned())
    })
}

/// Re-standardizes the aggregated country and nationality lists.
pub fn standardize_country_columns(
    df: &mut DataFrame,
    countries: &CountryMap,
    delimiter: &str,
) -> Result<PassSummary> {
    let mut summary = PassSummary::default();
    for name in output::COUNTRY_LISTS {
        let present = df
            .column(name)
            .is_ok_and(|column| column.dtype() == &DataType::String);
        if !present {
            continue;
        }
        let changed = map_text_column(df, name, |cell| countries.standardize_list(cell, delimiter))?;
        tracing::debug!(column = name, changed, "Standardized country list");
        summary.columns += 1;
        summary.cells_changed += changed;
    }
    Ok(summary)
}

/// Runs every pass in order.
pub fn clean_table(df: &mut DataFrame, config: &NormalizationConfig) -> Result<CleaningSummary> {
    let lrm = remove_lrm(df)?;
    let dates = convert_metadata_dates(df, &config.metadata_date_format)?;
    let whitespace = clean_whitespace(df)?;
    let countries = standardize_country_columns(df, &config.countries, &config.delimiter)?;
    Ok(CleaningSummary {
        lrm,
        dates,
        whitespace,
        countries,
    })
}
