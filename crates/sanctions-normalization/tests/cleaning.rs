//! Aggregated table construction followed by the cleaning passes.

use polars::prelude::{DataFrame, DataType};
use proptest::prelude::*;
use sanctions_model::SourceRecord;
use sanctions_model::columns::output;
use sanctions_normalization::{
    CountryMap, FrameOptions, NormalizationConfig, YearWindow, aggregate_records, clean_table,
    entities_to_frame, normalize_records,
};

fn config() -> NormalizationConfig {
    NormalizationConfig::default().with_dob_years(YearWindow::new(1900, 2024))
}

fn text(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .get(idx)
        .map(str::to_string)
}

fn build_clean_frame(rows: Vec<SourceRecord>) -> DataFrame {
    let config = config();
    let entities = aggregate_records(normalize_records(rows, &config), &config).unwrap();
    let mut df = entities_to_frame(&entities, FrameOptions::default()).unwrap();
    clean_table(&mut df, &config).unwrap();
    df
}

#[test]
fn two_row_entity_end_to_end() {
    let mut primary = SourceRecord::new(7);
    primary.alias_type = Some("Primary name".to_string());
    primary.name_parts[0] = Some("Ivan".to_string());
    primary.name_parts[1] = Some("Petrov".to_string());
    primary.country = Some("USSR".to_string());
    primary.dob = Some("00/00/1950".to_string());
    primary.group_type = Some("Individual".to_string());
    primary.regime = Some("Russia".to_string());
    primary.listed_on = Some("15/03/2022".to_string());

    let mut alias = SourceRecord::new(7);
    alias.alias_type = Some("alias".to_string());
    alias.name_parts[0] = Some("Ivan".to_string());
    alias.name_parts[1] = Some("P.".to_string());

    let df = build_clean_frame(vec![primary, alias]);

    assert_eq!(df.height(), 1);
    assert_eq!(text(&df, output::PRIMARY_NAME, 0).as_deref(), Some("Ivan Petrov"));
    assert_eq!(text(&df, output::ALIASES, 0).as_deref(), Some("Ivan P."));
    assert_eq!(text(&df, output::ALL_COUNTRIES, 0).as_deref(), Some("Russia (USSR)"));
    assert_eq!(text(&df, output::COUNTRIES_ADDRESS, 0).as_deref(), Some("Russia (USSR)"));
    assert_eq!(text(&df, output::DOB_YEAR, 0).as_deref(), Some("1950"));
    assert_eq!(text(&df, output::DOB_PRECISION, 0).as_deref(), Some("Year Only"));
    assert_eq!(text(&df, output::DOB_PARSED, 0).as_deref(), Some("1950-01-01"));
    assert_eq!(df.column(output::LISTED_ON).unwrap().dtype(), &DataType::Date);
    assert_eq!(df.column(output::LAST_UPDATED).unwrap().null_count(), 1);
}

#[test]
fn variants_merged_after_aggregation() {
    let mut a = SourceRecord::new(3);
    a.nationality = Some("(2) Russian Federation (77)".to_string());
    let mut b = SourceRecord::new(3);
    b.nationality = Some("Russia".to_string());
    let mut c = SourceRecord::new(3);
    c.nationality = Some("Russian".to_string());

    let df = build_clean_frame(vec![a, b, c]);

    assert_eq!(text(&df, output::NATIONALITIES, 0).as_deref(), Some("Russia"));
}

#[test]
fn invisible_marks_and_spacing_removed() {
    let mut a = SourceRecord::new(4);
    a.alias_type = Some("Primary name".to_string());
    a.name_parts[0] = Some("AL\u{200e}  QAIDA".to_string());
    a.regime = Some("\u{200e}".to_string());

    let df = build_clean_frame(vec![a]);

    assert_eq!(text(&df, output::PRIMARY_NAME, 0).as_deref(), Some("AL QAIDA"));
    assert_eq!(text(&df, output::REGIME, 0), None);
}

#[test]
fn cleaning_twice_changes_nothing() {
    let mut a = SourceRecord::new(5);
    a.name_parts[0] = Some("  Anna   Ivanova ".to_string());
    a.nationality = Some("DPRK".to_string());
    a.listed_on = Some("01/01/2020".to_string());

    let config = config();
    let entities = aggregate_records(normalize_records(vec![a], &config), &config).unwrap();
    let mut df = entities_to_frame(&entities, FrameOptions::default()).unwrap();
    clean_table(&mut df, &config).unwrap();
    let once = df.clone();
    let second = clean_table(&mut df, &config).unwrap();

    assert!(df.equals_missing(&once));
    assert_eq!(second.lrm.cells_changed, 0);
    assert_eq!(second.whitespace.cells_changed, 0);
    assert_eq!(second.countries.cells_changed, 0);
    assert!(second.dates.is_empty());
}

fn country_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Russian Federation".to_string()),
        Just("USSR".to_string()),
        Just("DPRK".to_string()),
        Just("Türkiye".to_string()),
        Just("Russia".to_string()),
        "[A-Za-z ]{0,10}",
    ]
}

proptest! {
    #[test]
    fn standardize_is_idempotent(tokens in proptest::collection::vec(country_token(), 0..8)) {
        let map = CountryMap::builtin();
        let cell = tokens.join("; ");
        let once = map.standardize_list(&cell, "; ");
        let twice = once.as_deref().and_then(|value| map.standardize_list(value, "; "));
        prop_assert_eq!(once, twice);
    }
}
