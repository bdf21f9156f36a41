//! Loading the raw list from disk and extracting typed rows.

use std::io::Write;

use sanctions_ingest::{IngestError, extract_source_records, read_source_table};
use sanctions_model::columns::input;
use tempfile::NamedTempFile;

/// Builds a raw list file: banner line, full header, then `rows`, where each
/// row lists `(column, value)` pairs and every other cell is blank.
fn write_list(rows: &[&[(&str, &str)]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Last Updated,13/05/2024").unwrap();
    writeln!(file, "{}", input::REQUIRED.join(",")).unwrap();
    for row in rows {
        let cells: Vec<String> = input::REQUIRED
            .iter()
            .map(|column| {
                row.iter()
                    .find(|(name, _)| name == column)
                    .map(|(_, value)| format!("\"{value}\""))
                    .unwrap_or_default()
            })
            .collect();
        writeln!(file, "{}", cells.join(",")).unwrap();
    }
    file
}

#[test]
fn extracts_rows_in_order() {
    let file = write_list(&[
        &[
            ("Group ID", "7"),
            ("Alias Type", "Primary name"),
            ("Name 1", "JOHN"),
            ("Name 6", "SMITH"),
            ("DOB", "01/02/1980"),
            ("Address 1", "1 Main St, Flat 2"),
        ],
        &[("Group ID", "7"), ("Alias Type", "AKA"), ("Name 6", "SMYTH")],
        &[("Group ID", "12"), ("Regime", "Russia")],
    ]);

    let df = read_source_table(file.path(), 1).unwrap();
    assert_eq!(df.height(), 3);

    let records = extract_source_records(&df).unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.group_id).collect();
    assert_eq!(ids, vec![7, 7, 12]);

    let first = &records[0];
    assert_eq!(first.alias_type.as_deref(), Some("Primary name"));
    assert_eq!(first.name_parts[0].as_deref(), Some("JOHN"));
    assert_eq!(first.name_parts[1], None);
    assert_eq!(first.name_parts[5].as_deref(), Some("SMITH"));
    assert_eq!(first.dob.as_deref(), Some("01/02/1980"));
    assert_eq!(first.address_lines[0].as_deref(), Some("1 Main St, Flat 2"));
    assert_eq!(first.regime, None);

    assert_eq!(records[2].regime.as_deref(), Some("Russia"));
}

#[test]
fn reports_every_missing_column() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Group ID,Regime").unwrap();
    writeln!(file, "7,Russia").unwrap();

    let df = read_source_table(file.path(), 0).unwrap();
    let err = extract_source_records(&df).unwrap_err();
    match err {
        IngestError::MissingColumns { columns } => {
            assert_eq!(columns.len(), input::REQUIRED.len() - 2);
            assert!(columns.iter().any(|c| c == "DOB"));
            assert!(!columns.iter().any(|c| c == "Regime"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_non_integer_group_id() {
    let file = write_list(&[&[("Group ID", "7")], &[("Group ID", "abc")]]);

    let df = read_source_table(file.path(), 1).unwrap();
    let err = extract_source_records(&df).unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidGroupId { row: 2, value: Some(ref v) } if v == "abc"
    ));
}

#[test]
fn rejects_missing_group_id() {
    let file = write_list(&[&[("Group ID", ""), ("Regime", "Russia")]]);

    let df = read_source_table(file.path(), 1).unwrap();
    let err = extract_source_records(&df).unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidGroupId { row: 1, value: None }
    ));
}

#[test]
fn rejects_negative_group_id() {
    let file = write_list(&[&[("Group ID", "3")], &[("Group ID", "-5")]]);

    let df = read_source_table(file.path(), 1).unwrap();
    let err = extract_source_records(&df).unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidGroupId { row: 2, value: Some(ref v) } if v == "-5"
    ));
}
