//! CSV/TSV reader producing ordered key-value records.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::SourceMetadata;
use crate::error::{Result, SantaError};
use crate::model::Record;

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = pick from the file extension).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Trim whitespace around headers.
    pub trim_headers: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            trim_headers: false,
        }
    }
}

/// Reads tabular files into [`Record`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordReader {
    config: ParserConfig,
}

impl RecordReader {
    /// Create a reader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read a `.csv` or `.tsv` file.
    ///
    /// A file with a header line but no data rows yields no records; the
    /// validator reports that case.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<(Vec<Record>, SourceMetadata)> {
        let path = path.as_ref();

        if path.to_string_lossy().trim().is_empty() {
            return Err(SantaError::MissingPath);
        }
        if !path.exists() {
            return Err(SantaError::NotFound(path.to_path_buf()));
        }
        let format =
            file_format(path).ok_or_else(|| SantaError::UnsupportedFormat(path.to_path_buf()))?;

        let contents = fs::read(path).map_err(|e| SantaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = self.config.delimiter.unwrap_or(match format {
            "tsv" => b'\t',
            _ => b',',
        });
        let (headers, records) = self.parse_bytes(&contents, delimiter)?;

        debug!(
            path = %path.display(),
            rows = records.len(),
            columns = headers.len(),
            "read input file"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format.to_string(),
            records.len(),
            headers.len(),
        );

        Ok((records, metadata))
    }

    /// Parse bytes into headers and records.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<(Vec<String>, Vec<Record>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| {
                let h = h.trim_start_matches('\u{feff}');
                if self.config.trim_headers {
                    h.trim().to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        if headers.is_empty() {
            return Ok((Vec::new(), Vec::new()));
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            // Short rows are padded and long rows truncated to the header width
            let record: Record = headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), row.get(i).unwrap_or("").to_string()))
                .collect();
            records.push(record);
        }

        Ok((headers, records))
    }
}

/// Format implied by the file extension, if supported.
fn file_format(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "csv" => Some("csv"),
        "tsv" => Some("tsv"),
        _ => None,
    }
}
