//! Error types for the Secret Santa library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// Main error type for Secret Santa operations.
#[derive(Debug, Error)]
pub enum SantaError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No file path was given.
    #[error("File path is required.")]
    MissingPath,

    /// The given path does not exist.
    #[error("File \"{0}\" does not exist.")]
    NotFound(PathBuf),

    /// File extension is not one the reader understands.
    #[error("File \"{0}\" is not a CSV file. Please provide a .csv or .tsv file.")]
    UnsupportedFormat(PathBuf),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Nothing to write.
    #[error("{0}")]
    EmptyData(String),

    /// A record lacks a column needed to build a domain value.
    #[error("Missing required column: \"{0}\".")]
    MissingColumn(String),

    /// An input file failed validation.
    #[error("{} failed validation with {} error(s)", .path.display(), .report.errors.len())]
    InvalidInput {
        path: PathBuf,
        report: ValidationReport,
    },

    /// The generator hit its attempt bound without a valid permutation.
    #[error(
        "Could not generate valid Secret Santa assignments after {attempts} attempts. \
         This may happen if too many constraints conflict."
    )]
    ExhaustedAttempts { attempts: usize },
}

/// Result type alias for Secret Santa operations.
pub type Result<T> = std::result::Result<T, SantaError>;
