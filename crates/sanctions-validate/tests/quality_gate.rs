//! Quality gate over final tables.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use sanctions_model::GroupTypeSet;
use sanctions_model::columns::output;
use sanctions_validate::{Check, Issue, Severity, run_quality_gate};

fn text_column(name: &str, values: &[Option<&str>]) -> Column {
    Series::new(name.into(), values.to_vec()).into_column()
}

fn id_column(values: &[i64]) -> Column {
    Series::new(output::GROUP_ID.into(), values.to_vec()).into_column()
}

fn clean_frame() -> DataFrame {
    let listed = Series::new(output::LISTED_ON.into(), vec![Some(18_000i32), None])
        .cast(&DataType::Date)
        .unwrap()
        .into_column();
    DataFrame::new(vec![
        id_column(&[1, 2]),
        text_column(output::PRIMARY_NAME, &[Some("Anna"), Some("Ivan")]),
        text_column(output::GROUP_TYPE, &[Some("Individual"), Some("Ship")]),
        text_column(output::REGIME, &[Some("Russia"), Some("Syria")]),
        listed,
    ])
    .unwrap()
}

#[test]
fn clean_table_is_ready() {
    let report = run_quality_gate(&clean_frame(), &GroupTypeSet::default());

    assert!(report.is_ready());
    assert_eq!(report.issues().count(), 0);
    assert_eq!(report.results.len(), Check::all().len());
    assert!(report.render().contains("All checks passed."));
}

#[test]
fn missing_critical_column_fails() {
    let df = DataFrame::new(vec![id_column(&[1])]).unwrap();
    let report = run_quality_gate(&df, &GroupTypeSet::default());

    assert!(!report.is_ready());
    let missing: Vec<&str> = report
        .issues()
        .filter(|issue| matches!(issue, Issue::MissingColumn { .. }))
        .map(Issue::column)
        .collect();
    assert_eq!(
        missing,
        vec![output::PRIMARY_NAME, output::GROUP_TYPE, output::REGIME]
    );
}

#[test]
fn text_group_id_fails_integer_check() {
    let df = DataFrame::new(vec![
        text_column(output::GROUP_ID, &[Some("1"), Some("2")]),
        text_column(output::PRIMARY_NAME, &[Some("A"), Some("B")]),
        text_column(output::GROUP_TYPE, &[Some("Entity"), Some("Entity")]),
        text_column(output::REGIME, &[Some("Iran"), Some("Iran")]),
    ])
    .unwrap();
    let report = run_quality_gate(&df, &GroupTypeSet::default());

    assert!(!report.is_ready());
    assert_eq!(
        report.issues().collect::<Vec<_>>(),
        vec![&Issue::NonIntegerGroupId {
            column: output::GROUP_ID.to_string(),
            dtype: "string".to_string(),
        }]
    );
}

#[test]
fn warnings_alone_keep_table_ready() {
    let df = DataFrame::new(vec![
        id_column(&[1]),
        text_column(output::PRIMARY_NAME, &[Some("A")]),
        text_column(output::GROUP_TYPE, &[Some("Entity")]),
        text_column(output::REGIME, &[Some("")]),
        text_column(output::LAST_UPDATED, &[Some("01/01/2024")]),
    ])
    .unwrap();
    let report = run_quality_gate(&df, &GroupTypeSet::default());

    assert!(report.is_ready());
    assert_eq!(report.count(Severity::Warn), 2);
    assert_eq!(report.count(Severity::Fail), 0);
}

#[test]
fn custom_group_type_reference() {
    let accepted = GroupTypeSet::new("test-v2", ["Individual", "Entity", "Ship", "Vessel"]);
    let df = DataFrame::new(vec![
        id_column(&[1]),
        text_column(output::PRIMARY_NAME, &[Some("A")]),
        text_column(output::GROUP_TYPE, &[Some("Vessel")]),
        text_column(output::REGIME, &[Some("Iran")]),
    ])
    .unwrap();

    assert!(run_quality_gate(&df, &accepted).is_ready());
    assert!(!run_quality_gate(&df, &GroupTypeSet::default()).is_ready());
}

#[test]
fn report_text() {
    let df = DataFrame::new(vec![
        id_column(&[1, 2, 2]),
        text_column(output::PRIMARY_NAME, &[Some("Anna"), Some(" "), Some("Ivan")]),
        text_column(
            output::GROUP_TYPE,
            &[Some("Individual"), Some("Vessel"), Some("Entity")],
        ),
        text_column(output::REGIME, &[Some("Russia"), None, Some("Syria")]),
        text_column(output::LISTED_ON, &[Some("01/02/2020"), Some("x"), None]),
    ])
    .unwrap();
    let report = run_quality_gate(&df, &GroupTypeSet::default());

    assert!(!report.is_ready());
    insta::assert_snapshot!(report.render(), @r"
--- Final Data Quality Checks ---
  OK: 'Group ID' is integer type.
Issues found:
  - FAIL [presence]: Nulls found in critical column 'Regime': 1
  - FAIL [uniqueness]: Duplicate 'Group ID' values in 1 rows (e.g., 2)
  - WARN [format]: 'Listed_On' is not date-typed (found string)
  - WARN [format]: Empty strings found in 'Primary_Name': 1
  - FAIL [terminology]: Unexpected 'Group_Type' values: Vessel (reference consolidated-list-2024)
Recommendation: Address critical issues before using output.
--- Columns (3 rows) ---
  Group ID           3 non-null  int64
  Primary_Name       3 non-null  string
  Group_Type         3 non-null  string
  Regime             2 non-null  string
  Listed_On          2 non-null  string
");
}
