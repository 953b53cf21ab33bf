//! Secret Santa: constrained random gift-exchange pairing.
//!
//! Given a participant list and, optionally, last year's assignments, draws
//! a giver to receiver mapping in which nobody gives to themself and no
//! previous pairing repeats.
//!
//! # Example
//!
//! ```no_run
//! use secret_santa::SecretSanta;
//!
//! let santa = SecretSanta::new();
//! let participants = santa.load_participants("employees.csv").unwrap();
//! let previous = santa.load_previous("last_year.csv").unwrap();
//!
//! let assignments = santa.draw(&participants.items, &previous.items).unwrap();
//! println!("Drew {} assignments", assignments.len());
//! ```

pub mod assignment;
pub mod error;
pub mod fields;
pub mod input;
pub mod model;
pub mod output;
pub mod validation;

mod santa;

pub use crate::santa::{FileKind, Loaded, SantaConfig, SecretSanta};
pub use assignment::{AssignmentGenerator, ForbiddenPairs, MAX_ATTEMPTS};
pub use error::{Result, SantaError};
pub use input::{ParserConfig, RecordReader, SourceMetadata};
pub use model::{Assignment, Participant, PreviousPairing, Record, normalize_email};
pub use output::{OutputFormat, default_output_path, write_assignments};
pub use validation::{RecordValidator, ValidationIssue, ValidationReport, validate};
