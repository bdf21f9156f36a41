//! Quality gate for the consolidated sanctions table.
//!
//! Runs non-blocking checks over the final table and produces a
//! [`QualityReport`] with a ready flag:
//!
//! - **FAIL**: critical nulls, duplicate or non-integer `Group ID`, group
//!   types outside the accepted [`GroupTypeSet`](sanctions_model::GroupTypeSet)
//! - **WARN**: metadata dates not date-typed, blank key text values

pub mod checks;
mod issue;
mod report;

pub use issue::{Category, Issue, Severity};
pub use report::{Check, CheckResult, ColumnSummary, QualityReport, run_quality_gate};
