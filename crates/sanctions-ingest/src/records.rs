//! Column checks and typed row extraction.

use polars::prelude::{AnyValue, Column, DataFrame};
use sanctions_common::{any_to_i64, any_to_text};
use sanctions_model::SourceRecord;
use sanctions_model::columns::input;

use crate::error::{IngestError, Result};

/// Fails with every missing column named, not just the first.
pub fn check_required_columns(df: &DataFrame) -> Result<()> {
    let present: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
    let missing: Vec<String> = input::REQUIRED
        .iter()
        .filter(|name| !present.contains(*name))
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns { columns: missing })
    }
}

/// Borrowed handles to every column the extractor reads.
struct SourceColumns<'a> {
    group_id: &'a Column,
    alias_type: &'a Column,
    group_type: &'a Column,
    regime: &'a Column,
    title: &'a Column,
    name_parts: [&'a Column; 6],
    name_non_latin: &'a Column,
    dob: &'a Column,
    country_of_birth: &'a Column,
    nationality: &'a Column,
    country: &'a Column,
    address_lines: [&'a Column; 6],
    post_code: &'a Column,
    position: &'a Column,
    passport_number: &'a Column,
    national_id: &'a Column,
    listed_on: &'a Column,
    date_designated: &'a Column,
    last_updated: &'a Column,
}

impl<'a> SourceColumns<'a> {
    fn resolve(df: &'a DataFrame) -> Result<Self> {
        let [n1, n2, n3, n4, n5, n6] = input::NAME_PARTS;
        let [a1, a2, a3, a4, a5, a6] = input::ADDRESS_LINES;
        Ok(Self {
            group_id: df.column(input::GROUP_ID)?,
            alias_type: df.column(input::ALIAS_TYPE)?,
            group_type: df.column(input::GROUP_TYPE)?,
            regime: df.column(input::REGIME)?,
            title: df.column(input::TITLE)?,
            name_parts: [
                df.column(n1)?,
                df.column(n2)?,
                df.column(n3)?,
                df.column(n4)?,
                df.column(n5)?,
                df.column(n6)?,
            ],
            name_non_latin: df.column(input::NAME_NON_LATIN)?,
            dob: df.column(input::DOB)?,
            country_of_birth: df.column(input::COUNTRY_OF_BIRTH)?,
            nationality: df.column(input::NATIONALITY)?,
            country: df.column(input::COUNTRY)?,
            address_lines: [
                df.column(a1)?,
                df.column(a2)?,
                df.column(a3)?,
                df.column(a4)?,
                df.column(a5)?,
                df.column(a6)?,
            ],
            post_code: df.column(input::POST_CODE)?,
            position: df.column(input::POSITION)?,
            passport_number: df.column(input::PASSPORT_NUMBER)?,
            national_id: df.column(input::NATIONAL_ID)?,
            listed_on: df.column(input::LISTED_ON)?,
            date_designated: df.column(input::DATE_DESIGNATED)?,
            last_updated: df.column(input::LAST_UPDATED)?,
        })
    }
}

fn cell(column: &Column, idx: usize) -> Option<String> {
    any_to_text(column.get(idx).unwrap_or(AnyValue::Null))
}

/// Extracts one [`SourceRecord`] per row, in input order.
///
/// Blank cells become `None`. A row whose `Group ID` is missing or not a
/// non-negative integer is an error: the identifier is the grouping key and cannot be
/// guessed. Row numbers in errors are 1-based data rows.
pub fn extract_source_records(df: &DataFrame) -> Result<Vec<SourceRecord>> {
    check_required_columns(df)?;
    let columns = SourceColumns::resolve(df)?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let raw_id = columns.group_id.get(idx).unwrap_or(AnyValue::Null);
        let group_id = any_to_i64(raw_id.clone())
            .filter(|id| *id >= 0)
            .ok_or_else(|| IngestError::InvalidGroupId {
                row: idx + 1,
                value: any_to_text(raw_id),
            })?;

        records.push(SourceRecord {
            group_id,
            alias_type: cell(columns.alias_type, idx),
            group_type: cell(columns.group_type, idx),
            regime: cell(columns.regime, idx),
            title: cell(columns.title, idx),
            name_parts: columns.name_parts.map(|column| cell(column, idx)),
            name_non_latin: cell(columns.name_non_latin, idx),
            dob: cell(columns.dob, idx),
            country_of_birth: cell(columns.country_of_birth, idx),
            nationality: cell(columns.nationality, idx),
            country: cell(columns.country, idx),
            address_lines: columns.address_lines.map(|column| cell(column, idx)),
            post_code: cell(columns.post_code, idx),
            position: cell(columns.position, idx),
            passport_number: cell(columns.passport_number, idx),
            national_id: cell(columns.national_id, idx),
            listed_on: cell(columns.listed_on, idx),
            date_designated: cell(columns.date_designated, idx),
            last_updated: cell(columns.last_updated, idx),
        });
    }

    tracing::debug!(rows = records.len(), "Extracted source records");
    Ok(records)
}
