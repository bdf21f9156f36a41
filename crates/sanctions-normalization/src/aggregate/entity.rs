//! Entity-level aggregation: one consolidated record per `Group ID`.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use sanctions_common::join_list;
use sanctions_model::{AggregatedEntity, DobPrecision, NormalizedRecord};

use crate::aggregate::field::{aggregate_joined, aggregate_values, distinct_in_order};
use crate::config::NormalizationConfig;
use crate::error::{NormalizationError, Result};

/// All rows sharing one entity identifier, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityGroup {
    pub group_id: i64,
    pub rows: Vec<NormalizedRecord>,
}

/// Groups records by identifier.
///
/// Groups come back in ascending identifier order; rows keep their input
/// order inside each group, which the canonical-row tie-break relies on.
pub fn group_records(records: Vec<NormalizedRecord>) -> Vec<EntityGroup> {
    let mut groups: BTreeMap<i64, Vec<NormalizedRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.group_id()).or_default().push(record);
    }
    groups
        .into_iter()
        .map(|(group_id, rows)| EntityGroup { group_id, rows })
        .collect()
}

/// Picks the row that supplies the entity's identity.
///
/// First `Primary name` row, else first `Primary name variation` row, else
/// the first row. Returns `None` only for an empty slice.
pub fn select_canonical(rows: &[NormalizedRecord]) -> Option<&NormalizedRecord> {
    rows.iter().min_by_key(|row| row.alias_type.canonical_rank())
}

/// Every value of a name column minus the primary, sorted.
fn aliases<'a, I>(names: I, primary: Option<&str>, delimiter: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut all: BTreeSet<&str> = names.into_iter().flatten().collect();
    if let Some(primary) = primary {
        all.remove(primary);
    }
    let all: Vec<&str> = all.into_iter().collect();
    join_list(&all, delimiter)
}

/// Precision labels for the group.
///
/// Rows without a date of birth only count when no row of the group has one,
/// so an undated alias row does not add `Missing` next to a real label.
fn precision_labels(rows: &[NormalizedRecord], delimiter: &str) -> Option<String> {
    let any_present = rows.iter().any(|row| row.dob.precision != DobPrecision::Missing);
    aggregate_joined(
        rows.iter()
            .map(|row| row.dob.precision)
            .filter(|precision| !any_present || *precision != DobPrecision::Missing)
            .map(|precision| Some(precision.as_str())),
        delimiter,
    )
}

/// Address lines and postal code in field order, comma-joined.
///
/// Each field contributes its distinct values in first-seen order. Fields are
/// not deduplicated against each other and nothing is sorted.
fn full_address(rows: &[NormalizedRecord]) -> Option<String> {
    let fields: Vec<[Option<&str>; 7]> = rows.iter().map(|row| row.source.address_fields()).collect();
    let mut components: Vec<&str> = Vec::new();
    for idx in 0..7 {
        components.extend(distinct_in_order(fields.iter().map(|field| field[idx])));
    }
    join_list(&components, ", ")
}

fn log_metadata_disagreement(group_id: i64, canonical: &NormalizedRecord, rows: &[NormalizedRecord]) {
    let metadata = |row: &NormalizedRecord| {
        (
            row.source.listed_on.clone(),
            row.source.date_designated.clone(),
            row.source.last_updated.clone(),
        )
    };
    let expected = metadata(canonical);
    let differing = rows.iter().filter(|row| metadata(*row) != expected).count();
    if differing > 0 {
        tracing::debug!(
            group_id,
            differing_rows = differing,
            "Rows disagree on metadata dates; using canonical row"
        );
    }
}

/// Builds the consolidated record for one group.
///
/// Identity fields and metadata dates come from the canonical row; every
/// other attribute is reduced across all rows.
pub fn aggregate_group(group: &EntityGroup, config: &NormalizationConfig) -> Result<AggregatedEntity> {
    let rows = group.rows.as_slice();
    let canonical = select_canonical(rows).ok_or(NormalizationError::EmptyGroup {
        group_id: group.group_id,
    })?;
    let delimiter = config.delimiter.as_str();
    log_metadata_disagreement(group.group_id, canonical, rows);

    let primary_name = canonical.constructed_name.clone();
    let primary_name_non_latin = canonical.source.name_non_latin.clone();

    let parsed_dates: BTreeSet<NaiveDate> = rows.iter().filter_map(|row| row.dob.date).collect();
    let parsed_dates: Vec<String> = parsed_dates
        .iter()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect();

    let countries_of_birth = aggregate_values(rows.iter().map(|row| row.country_of_birth.as_deref()));
    let nationalities = aggregate_values(rows.iter().map(|row| row.nationality.as_deref()));
    let countries_address = aggregate_values(rows.iter().map(|row| row.country.as_deref()));
    let all_countries: BTreeSet<&String> = [&countries_of_birth, &nationalities, &countries_address]
        .into_iter()
        .flatten()
        .flatten()
        .collect();
    let all_countries: Vec<&String> = all_countries.into_iter().collect();
    let all_associated_countries = join_list(&all_countries, delimiter);

    let joined = |list: Option<Vec<String>>| list.and_then(|values| join_list(&values, delimiter));

    Ok(AggregatedEntity {
        group_id: group.group_id,
        aliases: aliases(
            rows.iter().map(|row| row.constructed_name.as_deref()),
            primary_name.as_deref(),
            delimiter,
        ),
        aliases_non_latin: aliases(
            rows.iter().map(|row| row.source.name_non_latin.as_deref()),
            primary_name_non_latin.as_deref(),
            delimiter,
        ),
        primary_name,
        primary_name_non_latin,
        group_type: canonical.source.group_type.clone(),
        regime: canonical.source.regime.clone(),
        dob_raw: aggregate_joined(rows.iter().map(|row| row.source.dob.as_deref()), delimiter),
        dob_parsed: join_list(&parsed_dates, delimiter),
        dob_year: aggregate_joined(
            rows.iter().map(|row| row.dob.year().map(|year| year.to_string())),
            delimiter,
        ),
        dob_precision: precision_labels(rows, delimiter),
        all_associated_countries,
        countries_of_birth: joined(countries_of_birth),
        nationalities: joined(nationalities),
        countries_address: joined(countries_address),
        positions: aggregate_joined(rows.iter().map(|row| row.source.position.as_deref()), delimiter),
        passport_numbers: aggregate_joined(
            rows.iter().map(|row| row.source.passport_number.as_deref()),
            delimiter,
        ),
        national_ids: aggregate_joined(
            rows.iter().map(|row| row.source.national_id.as_deref()),
            delimiter,
        ),
        full_address: full_address(rows),
        listed_on: canonical.source.listed_on.clone(),
        date_designated: canonical.source.date_designated.clone(),
        last_updated: canonical.source.last_updated.clone(),
    })
}

/// Groups and aggregates in one call, ascending by identifier.
pub fn aggregate_records(
    records: Vec<NormalizedRecord>,
    config: &NormalizationConfig,
) -> Result<Vec<AggregatedEntity>> {
    group_records(records)
        .iter()
        .map(|group| aggregate_group(group, config))
        .collect()
}
