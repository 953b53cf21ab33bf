//! Assignment file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SantaError};
use crate::model::Assignment;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Timestamped file name in the current directory,
/// e.g. `secret_santa_assignments_2024-12-01T10-30-00-000Z.csv`.
pub fn default_output_path(now: DateTime<Utc>, format: OutputFormat) -> PathBuf {
    let timestamp = now
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    PathBuf::from(format!(
        "secret_santa_assignments_{}.{}",
        timestamp,
        format.extension()
    ))
}

/// Write assignments to `path` in `format`.
///
/// Column names match the previous-year input layout.
pub fn write_assignments(
    path: impl AsRef<Path>,
    assignments: &[Assignment],
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    if assignments.is_empty() {
        return Err(SantaError::EmptyData(
            "No data provided to write to CSV.".to_string(),
        ));
    }

    let file = File::create(path).map_err(|e| SantaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut out = BufWriter::new(file);

    match format {
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Tsv { b'\t' } else { b',' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(&mut out);
            for assignment in assignments {
                writer.serialize(assignment)?;
            }
            writer.flush().map_err(|e| SantaError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, assignments)?;
            writeln!(out).map_err(|e| SantaError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    out.flush().map_err(|e| SantaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), rows = assignments.len(), %format, "wrote assignments");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ASSIGNMENT_FIELDS;
    use crate::model::Participant;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn sample() -> Vec<Assignment> {
        let alice = Participant::new("Alice", "alice@x.com");
        let bob = Participant::new("Bob", "bob@x.com");
        vec![Assignment::new(&alice, &bob), Assignment::new(&bob, &alice)]
    }

    #[test]
    fn test_default_output_path() {
        let now = Utc.with_ymd_and_hms(2024, 12, 1, 10, 30, 5).unwrap();
        let path = default_output_path(now, OutputFormat::Csv);
        assert_eq!(
            path,
            PathBuf::from("secret_santa_assignments_2024-12-01T10-30-05-000Z.csv")
        );
    }

    #[test]
    fn test_write_csv_headers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_assignments(&path, &sample(), OutputFormat::Csv).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(ASSIGNMENT_FIELDS.join(",").as_str()));
        assert_eq!(lines.next(), Some("Alice,alice@x.com,Bob,bob@x.com"));
    }

    #[test]
    fn test_write_tsv_headers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        write_assignments(&path, &sample(), OutputFormat::Tsv).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().next(), Some(ASSIGNMENT_FIELDS.join("\t").as_str()));
    }

    #[test]
    fn test_write_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_assignments(&path, &sample(), OutputFormat::Json).unwrap();

        let parsed: Vec<Assignment> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_write_empty_fails() {
        let dir = tempdir().unwrap();
        let err = write_assignments(dir.path().join("out.csv"), &[], OutputFormat::Csv).unwrap_err();
        assert_eq!(err.to_string(), "No data provided to write to CSV.");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }
}
