//! Quality gate execution and report rendering.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use sanctions_model::GroupTypeSet;

use crate::checks::{self, dtype_label};
use crate::issue::{Issue, Severity};

/// The checks the gate runs, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Check {
    CriticalNulls,
    UniqueGroupId,
    IntegerGroupId,
    MetadataDateTypes,
    KeyTextNotBlank,
    GroupTypes,
}

impl Check {
    pub const fn all() -> &'static [Self] {
        &[
            Self::CriticalNulls,
            Self::UniqueGroupId,
            Self::IntegerGroupId,
            Self::MetadataDateTypes,
            Self::KeyTextNotBlank,
            Self::GroupTypes,
        ]
    }

    /// Line shown when the check passes.
    pub fn ok_message(&self) -> &'static str {
        match self {
            Self::CriticalNulls => "No critical nulls.",
            Self::UniqueGroupId => "'Group ID' is unique.",
            Self::IntegerGroupId => "'Group ID' is integer type.",
            Self::MetadataDateTypes => "Metadata dates are date type.",
            Self::KeyTextNotBlank => "No empty strings in key text columns.",
            Self::GroupTypes => "'Group_Type' values as expected.",
        }
    }

    fn run(&self, df: &DataFrame, group_types: &GroupTypeSet) -> Vec<Issue> {
        match self {
            Self::CriticalNulls => checks::presence::check(df),
            Self::UniqueGroupId => checks::identifier::check_unique(df),
            Self::IntegerGroupId => checks::identifier::check_integer(df),
            Self::MetadataDateTypes => checks::dates::check(df),
            Self::KeyTextNotBlank => checks::text::check(df),
            Self::GroupTypes => checks::group_type::check(df, group_types),
        }
    }
}

/// Issues raised by one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: Check,
    pub issues: Vec<Issue>,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Null summary for one output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
}

/// Outcome of the quality gate.
///
/// The gate never aborts a run. A report that is not ready means the output
/// was produced but should be reviewed before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub row_count: usize,
    pub results: Vec<CheckResult>,
    pub columns: Vec<ColumnSummary>,
}

impl QualityReport {
    /// True when no check raised a failing issue.
    pub fn is_ready(&self) -> bool {
        self.issues().all(|issue| issue.severity() != Severity::Fail)
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.results.iter().flat_map(|result| result.issues.iter())
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues().filter(|issue| issue.severity() == severity).count()
    }

    /// Plain-text report: passed checks, issues, recommendation and a
    /// per-column non-null summary.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push("--- Final Data Quality Checks ---".to_string());
        for result in self.results.iter().filter(|result| result.passed()) {
            lines.push(format!("  OK: {}", result.check.ok_message()));
        }

        if self.issues().next().is_none() {
            lines.push("All checks passed.".to_string());
        } else {
            lines.push("Issues found:".to_string());
            for issue in self.issues() {
                lines.push(format!(
                    "  - {} [{}]: {}",
                    issue.severity().label(),
                    issue.category().label(),
                    issue.message()
                ));
            }
        }
        if !self.is_ready() {
            lines.push("Recommendation: Address critical issues before using output.".to_string());
        }

        lines.push(format!("--- Columns ({} rows) ---", self.row_count));
        let width = self
            .columns
            .iter()
            .map(|column| column.name.chars().count())
            .max()
            .unwrap_or(0);
        for column in &self.columns {
            lines.push(format!(
                "  {:<width$}  {:>6} non-null  {}",
                column.name, column.non_null, column.dtype
            ));
        }
        lines.join("\n")
    }
}

fn summarize_columns(df: &DataFrame) -> Vec<ColumnSummary> {
    df.get_columns()
        .iter()
        .map(|column| ColumnSummary {
            name: column.name().to_string(),
            dtype: dtype_label(column.dtype()),
            non_null: df.height() - column.null_count(),
        })
        .collect()
}

/// Runs every check over the final table.
pub fn run_quality_gate(df: &DataFrame, group_types: &GroupTypeSet) -> QualityReport {
    let results = Check::all()
        .iter()
        .map(|check| CheckResult {
            check: *check,
            issues: check.run(df, group_types),
        })
        .collect();
    QualityReport {
        row_count: df.height(),
        results,
        columns: summarize_columns(df),
    }
}
