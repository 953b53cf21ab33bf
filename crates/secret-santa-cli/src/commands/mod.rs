//! CLI command implementations.

pub mod generate;
pub mod validate;

use colored::Colorize;
use secret_santa::ValidationReport;

/// Print each validation error on its own line.
pub(crate) fn print_report_errors(report: &ValidationReport) {
    for message in report.messages() {
        println!("{}", format!("  ✗ {}", message).red());
    }
}
