//! Integration tests for the sanctions data model.

use chrono::NaiveDate;
use sanctions_model::columns::{input, output};
use sanctions_model::{AggregatedEntity, DobPrecision, GroupTypeSet, ParsedDob, SourceRecord};

#[test]
fn required_columns_include_dob_and_are_unique() {
    assert!(input::REQUIRED.contains(&input::DOB));
    let mut seen = std::collections::BTreeSet::new();
    for column in input::REQUIRED {
        assert!(seen.insert(column), "duplicate required column {column}");
    }
}

#[test]
fn output_order_starts_with_identifier_and_ends_with_metadata_dates() {
    assert_eq!(output::ORDER[0], output::GROUP_ID);
    assert_eq!(&output::ORDER[18..], &output::METADATA_DATES);
    assert!(!output::ORDER.contains(&output::DOB_RAW));
}

#[test]
fn address_fields_append_post_code() {
    let mut record = SourceRecord::new(1);
    record.address_lines[0] = Some("1 Red Square".to_string());
    record.post_code = Some("101000".to_string());
    let fields = record.address_fields();
    assert_eq!(fields[0], Some("1 Red Square"));
    assert_eq!(fields[1], None);
    assert_eq!(fields[6], Some("101000"));
}

#[test]
fn parsed_dob_year() {
    let dob = ParsedDob {
        date: NaiveDate::from_ymd_opt(1950, 1, 1),
        precision: DobPrecision::YearOnly,
    };
    assert_eq!(dob.year(), Some(1950));
    assert_eq!(ParsedDob::missing().year(), None);
}

#[test]
fn default_group_types() {
    let set = GroupTypeSet::default();
    assert!(set.contains("Individual"));
    assert!(set.contains("Entity"));
    assert!(set.contains("Ship"));
    assert!(!set.contains("Vessel"));
}

#[test]
fn entity_serializes() {
    let entity = AggregatedEntity {
        group_id: 7,
        primary_name: Some("Ivan Petrov".to_string()),
        ..AggregatedEntity::default()
    };
    let json = serde_json::to_string(&entity).expect("serialize entity");
    let round: AggregatedEntity = serde_json::from_str(&json).expect("deserialize entity");
    assert_eq!(round, entity);
}
