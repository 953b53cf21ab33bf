//! Validate command - check an input file without drawing.

use std::path::PathBuf;

use colored::Colorize;
use secret_santa::{FileKind, SecretSanta};

use super::print_report_errors;

pub fn run(
    file: PathBuf,
    kind: FileKind,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let santa = SecretSanta::new();
    let (report, source) = santa.check_file(&file, kind)?;

    if json_output {
        let status = serde_json::json!({
            "file": source.file,
            "kind": kind.to_string(),
            "hash": source.hash,
            "rows": source.row_count,
            "columns": source.column_count,
            "valid": report.valid,
            "errors": report.errors,
            "messages": report.messages(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!(
            "{} {} ({} file, {} rows)",
            "Validating".cyan().bold(),
            source.file.white(),
            kind,
            source.row_count
        );
        if verbose {
            println!("  hash: {}", source.hash);
        }

        if report.valid {
            println!("{}", "No issues found - file is valid.".green());
        } else {
            print_report_errors(&report);
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err(format!("{} validation error(s)", report.errors.len()).into())
    }
}
