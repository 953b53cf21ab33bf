//! Main SecretSanta struct and public API.

use std::path::Path;

use fastrand::Rng;
use tracing::info;

use crate::assignment::{AssignmentGenerator, MAX_ATTEMPTS};
use crate::error::{Result, SantaError};
use crate::fields::{EMPLOYEE_REQUIRED_FIELDS, PREVIOUS_REQUIRED_FIELDS};
use crate::input::{ParserConfig, RecordReader, SourceMetadata};
use crate::model::{Assignment, Participant, PreviousPairing, Record};
use crate::validation::{MIN_PARTICIPANTS, RecordValidator, ValidationReport};

/// Configuration for a Secret Santa draw.
#[derive(Debug, Clone)]
pub struct SantaConfig {
    /// Reader configuration.
    pub parser: ParserConfig,
    /// Columns required in the participant file.
    pub employee_fields: Vec<String>,
    /// Columns required in the previous-year file.
    pub previous_fields: Vec<String>,
    /// Fewest records either file may hold.
    pub min_participants: usize,
    /// Shuffles tried before giving up.
    pub max_attempts: usize,
    /// Seed for reproducible draws (None = entropy).
    pub seed: Option<u64>,
}

impl Default for SantaConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            employee_fields: to_owned(EMPLOYEE_REQUIRED_FIELDS),
            previous_fields: to_owned(PREVIOUS_REQUIRED_FIELDS),
            min_participants: MIN_PARTICIPANTS,
            max_attempts: MAX_ATTEMPTS,
            seed: None,
        }
    }
}

fn to_owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// Which kind of input file is being checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileKind {
    /// Participant list.
    #[default]
    Employees,
    /// Previous-year assignments.
    Previous,
}

impl std::str::FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "employees" | "participants" => Ok(FileKind::Employees),
            "previous" | "history" => Ok(FileKind::Previous),
            _ => Err(format!("Unknown file kind: {}. Use employees or previous.", s)),
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Employees => write!(f, "employees"),
            FileKind::Previous => write!(f, "previous"),
        }
    }
}

/// Records read from a file together with their source metadata.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub source: SourceMetadata,
}

/// Reads, validates and draws assignments.
pub struct SecretSanta {
    config: SantaConfig,
    reader: RecordReader,
    generator: AssignmentGenerator,
}

impl SecretSanta {
    /// Create an instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SantaConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: SantaConfig) -> Self {
        let reader = RecordReader::with_config(config.parser.clone());
        let generator = AssignmentGenerator::new().with_max_attempts(config.max_attempts);

        Self {
            config,
            reader,
            generator,
        }
    }

    /// Set a seed for reproducible draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate participant records without reading a file.
    pub fn validate_participants(&self, records: &[Record]) -> ValidationReport {
        self.validator(&self.config.employee_fields).validate(records)
    }

    /// Validate previous-year records without reading a file.
    pub fn validate_previous(&self, records: &[Record]) -> ValidationReport {
        self.validator(&self.config.previous_fields).validate(records)
    }

    /// Read a file and validate it, without converting records.
    pub fn check_file(
        &self,
        path: impl AsRef<Path>,
        kind: FileKind,
    ) -> Result<(ValidationReport, SourceMetadata)> {
        let (records, source) = self.reader.read(path)?;
        let report = match kind {
            FileKind::Employees => self.validate_participants(&records),
            FileKind::Previous => self.validate_previous(&records),
        };
        Ok((report, source))
    }

    /// Read and validate the participant file.
    pub fn load_participants(&self, path: impl AsRef<Path>) -> Result<Loaded<Participant>> {
        let path = path.as_ref();
        let (records, source) = self.reader.read(path)?;
        ensure_valid(path, self.validate_participants(&records))?;

        let items = records
            .iter()
            .map(Participant::from_record)
            .collect::<Result<Vec<_>>>()?;
        info!(count = items.len(), file = %source.file, "loaded participants");
        Ok(Loaded { items, source })
    }

    /// Read and validate a previous-year assignment file.
    pub fn load_previous(&self, path: impl AsRef<Path>) -> Result<Loaded<PreviousPairing>> {
        let path = path.as_ref();
        let (records, source) = self.reader.read(path)?;
        ensure_valid(path, self.validate_previous(&records))?;

        let items = records
            .iter()
            .map(PreviousPairing::from_record)
            .collect::<Result<Vec<_>>>()?;
        info!(count = items.len(), file = %source.file, "loaded previous assignments");
        Ok(Loaded { items, source })
    }

    /// Draw assignments using the configured seed, if any.
    pub fn draw(
        &self,
        participants: &[Participant],
        previous: &[PreviousPairing],
    ) -> Result<Vec<Assignment>> {
        let mut rng = match self.config.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        self.generator
            .generate_with_rng(participants, previous, &mut rng)
    }

    fn validator(&self, fields: &[String]) -> RecordValidator {
        RecordValidator::new(fields).with_min_records(self.config.min_participants)
    }
}

impl Default for SecretSanta {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_valid(path: &Path, report: ValidationReport) -> Result<()> {
    if report.valid {
        Ok(())
    } else {
        Err(SantaError::InvalidInput {
            path: path.to_path_buf(),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_participants() {
        let file = create_test_file(
            "Employee_Name,Employee_EmailID\nAlice,alice@x.com\nBob,bob@x.com\n",
        );
        let loaded = SecretSanta::new().load_participants(file.path()).unwrap();

        assert_eq!(loaded.items.len(), 2);
        assert_eq!(loaded.items[0], Participant::new("Alice", "alice@x.com"));
        assert_eq!(loaded.source.row_count, 2);
    }

    #[test]
    fn test_invalid_file_carries_report() {
        let file = create_test_file("Employee_Name,Employee_EmailID\nAlice,not-an-email\n");
        let err = SecretSanta::new().load_participants(file.path()).unwrap_err();

        match err {
            SantaError::InvalidInput { report, .. } => {
                assert_eq!(
                    report.messages(),
                    vec![
                        "Invalid email format \"not-an-email\" at row 1.",
                        "At least 2 participants are required for Secret Santa.",
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_header_reports_missing_columns() {
        let file = create_test_file(",\nAlice,alice@x.com\nBob,bob@x.com\n");
        let err = SecretSanta::new().load_participants(file.path()).unwrap_err();

        let SantaError::InvalidInput { report, .. } = err else {
            panic!("expected validation failure");
        };
        assert_eq!(
            report.messages(),
            vec![
                "Missing required column: \"Employee_Name\".",
                "Missing required column: \"Employee_EmailID\".",
            ]
        );
    }

    #[test]
    fn test_previous_file_needs_all_columns() {
        let file = create_test_file("Employee_Name,Employee_EmailID\nAlice,a@x.com\nBob,b@x.com\n");
        let (report, _) = SecretSanta::new().check_file(file.path(), FileKind::Previous).unwrap();

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_seeded_draw_repeats() {
        let participants: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .map(|n| Participant::new(*n, format!("{n}@x.com")))
            .collect();
        let santa = SecretSanta::new().with_seed(2024);

        assert_eq!(
            santa.draw(&participants, &[]).unwrap(),
            santa.draw(&participants, &[]).unwrap()
        );
    }
}
