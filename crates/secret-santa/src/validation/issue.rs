//! Validation findings and the overall verdict.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single problem found in an input file.
///
/// Rows are 1-indexed, counting data rows only.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("Data is empty.")]
    EmptyData,

    #[error("Missing required column: \"{field}\".")]
    MissingColumn { field: String },

    #[error("{field} is empty at row {row}.")]
    EmptyValue { field: String, row: usize },

    #[error("Invalid email format \"{value}\" at row {row}.")]
    InvalidEmail { value: String, row: usize },

    #[error("Duplicate email \"{value}\" in {field} at row {row}.")]
    DuplicateEmail {
        value: String,
        field: String,
        row: usize,
    },

    #[error("At least {minimum} participants are required for Secret Santa.")]
    TooFewRecords { minimum: usize },
}

impl ValidationIssue {
    /// Row the issue refers to, if it is row-specific.
    pub fn row(&self) -> Option<usize> {
        match self {
            ValidationIssue::EmptyValue { row, .. }
            | ValidationIssue::InvalidEmail { row, .. }
            | ValidationIssue::DuplicateEmail { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// Verdict of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff `errors` is empty.
    pub valid: bool,
    /// Every problem found, in discovery order.
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Build a report from collected issues.
    pub fn from_issues(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Human-readable messages, one per issue.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let report = ValidationReport::from_issues(vec![
            ValidationIssue::MissingColumn {
                field: "Employee_Name".into(),
            },
            ValidationIssue::DuplicateEmail {
                value: "Bob@x.com".into(),
                field: "Employee_EmailID".into(),
                row: 3,
            },
            ValidationIssue::TooFewRecords { minimum: 2 },
        ]);

        assert!(!report.valid);
        assert_eq!(
            report.messages(),
            vec![
                "Missing required column: \"Employee_Name\".",
                "Duplicate email \"Bob@x.com\" in Employee_EmailID at row 3.",
                "At least 2 participants are required for Secret Santa.",
            ]
        );
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::from_issues(Vec::new());
        assert!(report.valid);
        assert!(report.messages().is_empty());
    }

    #[test]
    fn test_serialize_tagged() {
        let issue = ValidationIssue::EmptyValue {
            field: "Employee_Name".into(),
            row: 4,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "empty_value");
        assert_eq!(json["row"], 4);
        assert_eq!(issue.row(), Some(4));
    }
}
