//! Per-row normalization passes.
//!
//! Each pass is pure per row, so the passes can run in any row order. They
//! are exposed separately so the caller can report each stage on its own.

use std::collections::BTreeMap;

use sanctions_model::{AliasType, DobPrecision, NormalizedRecord, ParsedDob, SourceRecord};

use crate::config::{NormalizationConfig, YearWindow};
use crate::normalization::{build_display_name, clean_country_string, parse_dob};

/// Wraps a source row before any field has been normalized.
pub fn prepare_record(source: SourceRecord) -> NormalizedRecord {
    NormalizedRecord {
        alias_type: AliasType::from_raw(source.alias_type.as_deref()),
        constructed_name: None,
        dob: ParsedDob::missing(),
        country_of_birth: None,
        nationality: None,
        country: None,
        source,
    }
}

/// Count of rows per date-of-birth precision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DobSummary {
    pub counts: BTreeMap<DobPrecision, usize>,
}

impl DobSummary {
    pub fn count(&self, precision: DobPrecision) -> usize {
        self.counts.get(&precision).copied().unwrap_or(0)
    }
}

/// Parses every row's raw date of birth.
pub fn parse_dates(records: &mut [NormalizedRecord], years: YearWindow) -> DobSummary {
    let mut summary = DobSummary::default();
    for record in records.iter_mut() {
        record.dob = parse_dob(record.source.dob.as_deref(), years);
        *summary.counts.entry(record.dob.precision).or_default() += 1;
    }
    summary
}

/// Cleans country of birth, nationality and address country on every row.
///
/// Returns the number of non-empty raw cells that cleaned down to nothing.
pub fn clean_countries(records: &mut [NormalizedRecord]) -> usize {
    let mut emptied = 0;
    for record in records.iter_mut() {
        let source = &record.source;
        let cleaned = [
            (&source.country_of_birth, &mut record.country_of_birth),
            (&source.nationality, &mut record.nationality),
            (&source.country, &mut record.country),
        ];
        for (raw, target) in cleaned {
            *target = clean_country_string(raw.as_deref());
            if raw.is_some() && target.is_none() {
                emptied += 1;
            }
        }
    }
    emptied
}

/// Builds every row's display name from title and name parts.
///
/// Returns the number of rows left without a name.
pub fn build_names(records: &mut [NormalizedRecord]) -> usize {
    let mut unnamed = 0;
    for record in records.iter_mut() {
        let source = &record.source;
        let parts = std::iter::once(source.title.as_deref())
            .chain(source.name_parts.iter().map(Option::as_deref));
        record.constructed_name = build_display_name(parts);
        if record.constructed_name.is_none() {
            unnamed += 1;
        }
    }
    unnamed
}

/// Runs every row pass in pipeline order.
pub fn normalize_records(sources: Vec<SourceRecord>, config: &NormalizationConfig) -> Vec<NormalizedRecord> {
    let mut records: Vec<NormalizedRecord> = sources.into_iter().map(prepare_record).collect();
    parse_dates(&mut records, config.dob_years);
    clean_countries(&mut records);
    build_names(&mut records);
    records
}
