//! Structural and content validation of input records.

mod issue;
mod validator;

pub use issue::{ValidationIssue, ValidationReport};
pub use validator::{MIN_PARTICIPANTS, RecordValidator, is_valid_email, validate};
