//! Aggregated-table construction.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use sanctions_model::AggregatedEntity;
use sanctions_model::columns::output;

use crate::error::Result;

/// Column-set options for the aggregated table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOptions {
    /// Keep `DOB_Raw_Agg`, placed before `DOB_Parsed_Agg`.
    pub keep_raw_dob: bool,
}

type TextField = fn(&AggregatedEntity) -> Option<&str>;

fn text_field(column: &str) -> Option<TextField> {
    let field: TextField = match column {
        output::PRIMARY_NAME => |e| e.primary_name.as_deref(),
        output::ALIASES => |e| e.aliases.as_deref(),
        output::PRIMARY_NAME_NON_LATIN => |e| e.primary_name_non_latin.as_deref(),
        output::ALIASES_NON_LATIN => |e| e.aliases_non_latin.as_deref(),
        output::GROUP_TYPE => |e| e.group_type.as_deref(),
        output::REGIME => |e| e.regime.as_deref(),
        output::DOB_RAW => |e| e.dob_raw.as_deref(),
        output::DOB_PARSED => |e| e.dob_parsed.as_deref(),
        output::DOB_YEAR => |e| e.dob_year.as_deref(),
        output::DOB_PRECISION => |e| e.dob_precision.as_deref(),
        output::COUNTRIES_OF_BIRTH => |e| e.countries_of_birth.as_deref(),
        output::NATIONALITIES => |e| e.nationalities.as_deref(),
        output::COUNTRIES_ADDRESS => |e| e.countries_address.as_deref(),
        output::ALL_COUNTRIES => |e| e.all_associated_countries.as_deref(),
        output::POSITIONS => |e| e.positions.as_deref(),
        output::PASSPORT_NUMBERS => |e| e.passport_numbers.as_deref(),
        output::NATIONAL_IDS => |e| e.national_ids.as_deref(),
        output::FULL_ADDRESS => |e| e.full_address.as_deref(),
        output::LISTED_ON => |e| e.listed_on.as_deref(),
        output::DATE_DESIGNATED => |e| e.date_designated.as_deref(),
        output::LAST_UPDATED => |e| e.last_updated.as_deref(),
        _ => return None,
    };
    Some(field)
}

/// Output column names in order for the given options.
pub fn output_columns(options: FrameOptions) -> Vec<&'static str> {
    let mut columns = Vec::with_capacity(output::ORDER.len() + 1);
    for column in output::ORDER {
        if column == output::DOB_PARSED && options.keep_raw_dob {
            columns.push(output::DOB_RAW);
        }
        columns.push(column);
    }
    columns
}

/// Builds the aggregated table, one row per entity, in the given order.
///
/// `Group ID` is an `Int64` column; every other column is text. Metadata
/// dates stay as raw strings here and are typed by the cleaning passes.
pub fn entities_to_frame(entities: &[AggregatedEntity], options: FrameOptions) -> Result<DataFrame> {
    let names = output_columns(options);
    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for name in names {
        if name == output::GROUP_ID {
            let ids: Vec<i64> = entities.iter().map(|e| e.group_id).collect();
            columns.push(Series::new(name.into(), ids).into());
            continue;
        }
        let Some(field) = text_field(name) else {
            continue;
        };
        let values: Vec<Option<&str>> = entities.iter().map(field).collect();
        columns.push(Series::new(name.into(), values).into());
    }
    Ok(DataFrame::new(columns)?)
}
