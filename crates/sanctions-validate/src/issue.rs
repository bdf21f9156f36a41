//! Quality issue types.
//!
//! Each variant carries only the data its message needs.

use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Output should not be used until fixed
    Fail,
    /// Should review
    Warn,
}

impl Severity {
    /// Label used in the rendered report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Warn => "WARN",
        }
    }
}

/// Check category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Presence,
    Uniqueness,
    Type,
    Format,
    Terminology,
}

impl Category {
    /// Label used in the rendered report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presence => "presence",
            Self::Uniqueness => "uniqueness",
            Self::Type => "type",
            Self::Format => "format",
            Self::Terminology => "terminology",
        }
    }
}

/// Quality issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Presence checks
    /// Critical column absent from the table
    MissingColumn { column: String },
    /// Critical column has null values
    CriticalNull { column: String, null_count: u64 },

    // Identifier checks
    /// Entity identifier repeats across rows
    DuplicateGroupId {
        column: String,
        duplicate_count: u64,
        samples: Vec<String>,
    },
    /// Entity identifier column is not an integer type
    NonIntegerGroupId { column: String, dtype: String },

    // Format checks
    /// Metadata date column was not converted to a date type
    DateNotTyped { column: String, dtype: String },
    /// Key text column holds blank strings
    EmptyText { column: String, empty_count: u64 },

    // Terminology checks
    /// Group type outside the accepted reference set
    UnexpectedGroupType {
        column: String,
        values: Vec<String>,
        reference_version: String,
    },
}

impl Issue {
    /// Stable identifier for the rule that raised the issue.
    pub fn rule_id(&self) -> &'static str {
        match self {
            Issue::MissingColumn { .. } => "QG001",
            Issue::CriticalNull { .. } => "QG002",
            Issue::DuplicateGroupId { .. } => "QG003",
            Issue::NonIntegerGroupId { .. } => "QG004",
            Issue::DateNotTyped { .. } => "QG005",
            Issue::EmptyText { .. } => "QG006",
            Issue::UnexpectedGroupType { .. } => "QG007",
        }
    }

    /// Column the issue is about.
    pub fn column(&self) -> &str {
        match self {
            Issue::MissingColumn { column }
            | Issue::CriticalNull { column, .. }
            | Issue::DuplicateGroupId { column, .. }
            | Issue::NonIntegerGroupId { column, .. }
            | Issue::DateNotTyped { column, .. }
            | Issue::EmptyText { column, .. }
            | Issue::UnexpectedGroupType { column, .. } => column,
        }
    }

    /// Count of occurrences (if applicable).
    pub fn count(&self) -> Option<u64> {
        match self {
            Issue::CriticalNull { null_count, .. } => Some(*null_count),
            Issue::DuplicateGroupId {
                duplicate_count, ..
            } => Some(*duplicate_count),
            Issue::EmptyText { empty_count, .. } => Some(*empty_count),
            Issue::UnexpectedGroupType { values, .. } => Some(values.len() as u64),
            Issue::MissingColumn { .. }
            | Issue::NonIntegerGroupId { .. }
            | Issue::DateNotTyped { .. } => None,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Issue::MissingColumn { .. } | Issue::CriticalNull { .. } => Category::Presence,
            Issue::DuplicateGroupId { .. } => Category::Uniqueness,
            Issue::NonIntegerGroupId { .. } => Category::Type,
            Issue::DateNotTyped { .. } | Issue::EmptyText { .. } => Category::Format,
            Issue::UnexpectedGroupType { .. } => Category::Terminology,
        }
    }

    /// Only date typing and blank text are advisory.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DateNotTyped { .. } | Issue::EmptyText { .. } => Severity::Warn,
            _ => Severity::Fail,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::MissingColumn { column } => format!("Critical column '{column}' is missing"),
            Issue::CriticalNull { column, null_count } => {
                format!("Nulls found in critical column '{column}': {null_count}")
            }
            Issue::DuplicateGroupId {
                column,
                duplicate_count,
                samples,
            } => format!(
                "Duplicate '{column}' values in {duplicate_count} rows (e.g., {})",
                samples.join(", ")
            ),
            Issue::NonIntegerGroupId { column, dtype } => {
                format!("'{column}' is not integer (found {dtype})")
            }
            Issue::DateNotTyped { column, dtype } => {
                format!("'{column}' is not date-typed (found {dtype})")
            }
            Issue::EmptyText {
                column,
                empty_count,
            } => format!("Empty strings found in '{column}': {empty_count}"),
            Issue::UnexpectedGroupType {
                column,
                values,
                reference_version,
            } => format!(
                "Unexpected '{column}' values: {} (reference {reference_version})",
                values.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_split() {
        let warn = Issue::EmptyText {
            column: "Regime".to_string(),
            empty_count: 2,
        };
        let fail = Issue::NonIntegerGroupId {
            column: "Group ID".to_string(),
            dtype: "string".to_string(),
        };
        assert_eq!(warn.severity(), Severity::Warn);
        assert_eq!(fail.severity(), Severity::Fail);
        assert_eq!(warn.severity().label(), "WARN");
    }

    #[test]
    fn test_message_and_count() {
        let issue = Issue::DuplicateGroupId {
            column: "Group ID".to_string(),
            duplicate_count: 2,
            samples: vec!["7".to_string(), "9".to_string()],
        };
        assert_eq!(issue.count(), Some(2));
        assert_eq!(issue.rule_id(), "QG003");
        assert_eq!(
            issue.message(),
            "Duplicate 'Group ID' values in 2 rows (e.g., 7, 9)"
        );
    }
}
