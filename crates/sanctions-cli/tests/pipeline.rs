//! End-to-end runs of the staged pipeline against on-disk fixtures.

use std::fs;
use std::io::Write;
use std::path::Path;

use polars::prelude::DataFrame;
use sanctions_cli::pipeline::{RunOptions, run_pipeline};
use sanctions_model::DobPrecision;
use sanctions_model::columns::{input, output};
use tempfile::{NamedTempFile, TempDir};

/// Raw list file: banner line, full header, then one line per row where
/// unnamed cells are blank.
fn write_list(dir: &Path, rows: &[&[(&str, &str)]]) -> std::path::PathBuf {
    let path = dir.join("ConList.csv");
    let mut lines = vec![
        "Last Updated,13/05/2024".to_string(),
        input::REQUIRED.join(","),
    ];
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
        lines.push(cells.join(","));
    }
    fs::write(&path, lines.join("\n") + "\n").unwrap();
    path
}

fn sample_list(dir: &Path) -> std::path::PathBuf {
    write_list(
        dir,
        &[
            &[
                ("Group ID", "30"),
                ("Alias Type", "Primary name"),
                ("Group Type", "Entity"),
                ("Regime", "Libya"),
                ("Name 6", "Acme Trading"),
                ("Country", "Libya"),
                ("Listed On", "10/03/2022"),
            ],
            &[
                ("Group ID", "7"),
                ("Alias Type", "Primary name"),
                ("Group Type", "Individual"),
                ("Regime", "Russia"),
                ("Name 1", "Ivan"),
                ("Name 2", "Petrov"),
                ("Country", "USSR"),
                ("DOB", "00/00/1950"),
                ("Listed On", "15/03/2022"),
            ],
            &[
                ("Group ID", "7"),
                ("Alias Type", "alias"),
                ("Group Type", "Individual"),
                ("Regime", "Russia"),
                ("Name 1", "Ivan"),
                ("Name 2", "P."),
            ],
        ],
    )
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

#[test]
fn run_writes_one_sorted_row_per_entity() {
    let dir = TempDir::new().unwrap();
    let input_path = sample_list(dir.path());
    let output_path = dir.path().join("out").join("Structured_Sanctions_Data.csv");

    let result = run_pipeline(&RunOptions::new(&input_path, &output_path)).unwrap();

    assert_eq!(result.source_rows, 3);
    assert_eq!(result.entity_count, 2);
    assert_eq!(result.output.as_deref(), Some(output_path.as_path()));
    assert_eq!(result.dob.count(DobPrecision::YearOnly), 1);
    assert!(result.report.is_ready(), "{}", result.report.render());

    let numbers: Vec<u8> = result.stages.iter().map(|s| s.number).collect();
    assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());

    let written = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], output::ORDER.join(","));
    assert!(lines[1].starts_with("7,Ivan Petrov,Ivan P.,"));
    assert!(lines[1].contains(",Russia (USSR),"));
    assert!(lines[1].contains(",2022-03-15,"));
    assert!(lines[2].starts_with("30,Acme Trading,"));
}

#[test]
fn dry_run_skips_export() {
    let dir = TempDir::new().unwrap();
    let input_path = sample_list(dir.path());
    let output_path = dir.path().join("never.csv");
    let mut options = RunOptions::new(&input_path, &output_path);
    options.dry_run = true;

    let result = run_pipeline(&options).unwrap();

    assert!(result.output.is_none());
    assert!(!output_path.exists());
    assert_eq!(result.table.height(), 2);
    assert_eq!(result.stages.len(), 12);
    assert_eq!(text(&result.table, output::PRIMARY_NAME, 0).as_deref(), Some("Ivan Petrov"));
}

#[test]
fn keep_raw_dob_places_column_before_parsed() {
    let dir = TempDir::new().unwrap();
    let input_path = sample_list(dir.path());
    let mut options = RunOptions::new(&input_path, dir.path().join("out.csv"));
    options.keep_raw_dob = true;
    options.dry_run = true;

    let result = run_pipeline(&options).unwrap();

    let names: Vec<String> = result
        .table
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let raw = names.iter().position(|n| n == output::DOB_RAW).unwrap();
    let parsed = names.iter().position(|n| n == output::DOB_PARSED).unwrap();
    assert_eq!(raw + 1, parsed);
    assert_eq!(text(&result.table, output::DOB_RAW, 0).as_deref(), Some("00/00/1950"));
}

#[test]
fn missing_column_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ConList.csv");
    let header: Vec<&str> = input::REQUIRED
        .iter()
        .copied()
        .filter(|column| *column != input::DOB)
        .collect();
    let row = format!("1{}", ",".repeat(header.len() - 1));
    fs::write(&path, format!("banner\n{}\n{row}\n", header.join(","))).unwrap();

    let error = run_pipeline(&RunOptions::new(&path, dir.path().join("out.csv"))).unwrap_err();

    assert!(format!("{error:#}").contains(input::DOB));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = run_pipeline(&RunOptions::new(
        dir.path().join("absent.csv"),
        dir.path().join("out.csv"),
    ));
    assert!(result.is_err());
}

#[test]
fn unexpected_group_type_reported_but_output_written() {
    let dir = TempDir::new().unwrap();
    let input_path = write_list(
        dir.path(),
        &[&[
            ("Group ID", "5"),
            ("Alias Type", "Primary name"),
            ("Group Type", "Vessel"),
            ("Regime", "Iran"),
            ("Name 6", "Sea Star"),
        ]],
    );
    let output_path = dir.path().join("out.csv");

    let result = run_pipeline(&RunOptions::new(&input_path, &output_path)).unwrap();

    assert!(!result.report.is_ready());
    assert!(output_path.exists());

    let mut options = RunOptions::new(&input_path, &output_path);
    options.group_types = vec!["Vessel".to_string()];
    let result = run_pipeline(&options).unwrap();
    assert!(result.report.issues().all(|issue| issue.rule_id() != "QG007"));
}

#[test]
fn country_map_file_extends_builtin_table() {
    let dir = TempDir::new().unwrap();
    let input_path = write_list(
        dir.path(),
        &[&[
            ("Group ID", "9"),
            ("Alias Type", "Primary name"),
            ("Group Type", "Individual"),
            ("Regime", "Myanmar"),
            ("Name 1", "Aung"),
            ("Nationality", "Burma"),
        ]],
    );
    let mut map = NamedTempFile::new().unwrap();
    write!(map, r#"{{"Burma": "Myanmar"}}"#).unwrap();

    let mut options = RunOptions::new(&input_path, dir.path().join("out.csv"));
    options.country_map = Some(map.path().to_path_buf());
    options.dry_run = true;
    let result = run_pipeline(&options).unwrap();

    assert_eq!(text(&result.table, output::NATIONALITIES, 0).as_deref(), Some("Myanmar"));
}

#[test]
fn malformed_country_map_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input_path = sample_list(dir.path());
    let mut map = NamedTempFile::new().unwrap();
    write!(map, "not json").unwrap();

    let mut options = RunOptions::new(&input_path, dir.path().join("out.csv"));
    options.country_map = Some(map.path().to_path_buf());

    assert!(run_pipeline(&options).is_err());
}
