//! Participant records and email identity.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SantaError};
use crate::fields::{EMPLOYEE_EMAIL, EMPLOYEE_NAME};

/// One input row, keyed by column name in file order.
pub type Record = IndexMap<String, String>;

/// Canonical form of an email address for identity comparisons.
///
/// Every equality check on emails (duplicate detection, forbidden pairs,
/// self-assignment) goes through this function.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Someone taking part in the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name.
    #[serde(rename = "Employee_Name")]
    pub name: String,
    /// Email address as it appeared in the input.
    #[serde(rename = "Employee_EmailID")]
    pub email: String,
}

impl Participant {
    /// Create a participant.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build a participant from a validated input record.
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self::new(
            field(record, EMPLOYEE_NAME)?,
            field(record, EMPLOYEE_EMAIL)?,
        ))
    }

    /// Normalized email, the participant's identity for matching.
    pub fn key(&self) -> String {
        normalize_email(&self.email)
    }
}

pub(crate) fn field<'a>(record: &'a Record, name: &str) -> Result<&'a str> {
    record
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| SantaError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
        assert_eq!(normalize_email("bob@x.com"), "bob@x.com");
    }

    #[test]
    fn test_from_record() {
        let rec = record(&[("Employee_Name", "Alice"), ("Employee_EmailID", "Alice@X.com")]);
        let p = Participant::from_record(&rec).unwrap();

        assert_eq!(p.name, "Alice");
        assert_eq!(p.email, "Alice@X.com");
        assert_eq!(p.key(), "alice@x.com");
    }

    #[test]
    fn test_from_record_missing_column() {
        let rec = record(&[("Employee_Name", "Alice")]);
        let err = Participant::from_record(&rec).unwrap_err();
        assert!(matches!(err, SantaError::MissingColumn(ref c) if c == "Employee_EmailID"));
    }
}
