//! Directed giver to receiver pairings.

use serde::{Deserialize, Serialize};

use super::participant::{Participant, Record, field, normalize_email};
use crate::error::Result;
use crate::fields::{EMPLOYEE_EMAIL, EMPLOYEE_NAME, SECRET_CHILD_EMAIL, SECRET_CHILD_NAME};

/// A giver to receiver edge from an earlier exchange that must not recur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousPairing {
    #[serde(rename = "Employee_Name")]
    pub giver_name: String,
    #[serde(rename = "Employee_EmailID")]
    pub giver_email: String,
    #[serde(rename = "Secret_Child_Name")]
    pub receiver_name: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub receiver_email: String,
}

impl PreviousPairing {
    /// Create a pairing from giver and receiver emails only.
    pub fn new(giver_email: impl Into<String>, receiver_email: impl Into<String>) -> Self {
        Self {
            giver_name: String::new(),
            giver_email: giver_email.into(),
            receiver_name: String::new(),
            receiver_email: receiver_email.into(),
        }
    }

    /// Build a pairing from a validated previous-year record.
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            giver_name: field(record, EMPLOYEE_NAME)?.to_string(),
            giver_email: field(record, EMPLOYEE_EMAIL)?.to_string(),
            receiver_name: field(record, SECRET_CHILD_NAME)?.to_string(),
            receiver_email: field(record, SECRET_CHILD_EMAIL)?.to_string(),
        })
    }

    /// Normalized (giver, receiver) key.
    pub fn key(&self) -> (String, String) {
        (
            normalize_email(&self.giver_email),
            normalize_email(&self.receiver_email),
        )
    }
}

/// One generated pairing.
///
/// Serializes with the same columns as [`PreviousPairing`], so this year's
/// output can be supplied as next year's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "Employee_Name")]
    pub giver_name: String,
    #[serde(rename = "Employee_EmailID")]
    pub giver_email: String,
    #[serde(rename = "Secret_Child_Name")]
    pub receiver_name: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub receiver_email: String,
}

impl Assignment {
    /// Pair a giver with a receiver, keeping both names and emails verbatim.
    pub fn new(giver: &Participant, receiver: &Participant) -> Self {
        Self {
            giver_name: giver.name.clone(),
            giver_email: giver.email.clone(),
            receiver_name: receiver.name.clone(),
            receiver_email: receiver.email.clone(),
        }
    }

    /// Normalized (giver, receiver) key.
    pub fn key(&self) -> (String, String) {
        (
            normalize_email(&self.giver_email),
            normalize_email(&self.receiver_email),
        )
    }
}

impl From<Assignment> for PreviousPairing {
    fn from(a: Assignment) -> Self {
        Self {
            giver_name: a.giver_name,
            giver_email: a.giver_email,
            receiver_name: a.receiver_name,
            receiver_email: a.receiver_email,
        }
    }
}
