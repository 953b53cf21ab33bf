//! Record validator for participant and previous-year files.

use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::issue::{ValidationIssue, ValidationReport};
use crate::fields::is_email_field;
use crate::model::{Record, normalize_email};

/// Fewest records a file may hold.
pub const MIN_PARTICIPANTS: usize = 2;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Check `local@domain.tld` syntax on a trimmed value.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Validate `records` against `required_fields` with the default minimum.
pub fn validate<S: AsRef<str>>(records: &[Record], required_fields: &[S]) -> ValidationReport {
    RecordValidator::new(required_fields).validate(records)
}

/// Checks that required columns exist, values are present, emails are
/// well formed and email columns hold no duplicates.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    required_fields: Vec<String>,
    min_records: usize,
}

impl RecordValidator {
    /// Create a validator for the given required columns.
    pub fn new<S: AsRef<str>>(required_fields: &[S]) -> Self {
        Self {
            required_fields: required_fields
                .iter()
                .map(|f| f.as_ref().to_string())
                .collect(),
            min_records: MIN_PARTICIPANTS,
        }
    }

    /// Override the minimum record count.
    pub fn with_min_records(mut self, min_records: usize) -> Self {
        self.min_records = min_records;
        self
    }

    /// Run every check and collect all issues.
    ///
    /// Returns early only for empty input and for missing columns, since
    /// per-row checks against an absent column would all fail.
    pub fn validate(&self, records: &[Record]) -> ValidationReport {
        let Some(first) = records.first() else {
            return ValidationReport::from_issues(vec![ValidationIssue::EmptyData]);
        };

        let missing: Vec<ValidationIssue> = self
            .required_fields
            .iter()
            .filter(|field| !first.contains_key(field.as_str()))
            .map(|field| ValidationIssue::MissingColumn {
                field: field.clone(),
            })
            .collect();
        if !missing.is_empty() {
            return ValidationReport::from_issues(missing);
        }

        let mut errors = Vec::new();
        let mut seen: IndexMap<&str, HashSet<String>> = self
            .required_fields
            .iter()
            .filter(|f| is_email_field(f))
            .map(|f| (f.as_str(), HashSet::new()))
            .collect();

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;

            for field in &self.required_fields {
                if value_of(record, field).is_none() {
                    errors.push(ValidationIssue::EmptyValue {
                        field: field.clone(),
                        row,
                    });
                }
            }

            for (field, emails) in seen.iter_mut() {
                let Some(raw) = value_of(record, field) else {
                    continue;
                };

                if !is_valid_email(raw) {
                    errors.push(ValidationIssue::InvalidEmail {
                        value: raw.to_string(),
                        row,
                    });
                    continue;
                }

                if !emails.insert(normalize_email(raw)) {
                    errors.push(ValidationIssue::DuplicateEmail {
                        value: raw.to_string(),
                        field: field.to_string(),
                        row,
                    });
                }
            }
        }

        if records.len() < self.min_records {
            errors.push(ValidationIssue::TooFewRecords {
                minimum: self.min_records,
            });
        }

        ValidationReport::from_issues(errors)
    }
}

/// The raw value of a field, or None if missing or blank.
fn value_of<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}
