//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use secret_santa::{FileKind, OutputFormat};

/// Secret Santa: draw gift-exchange assignments from a participant list
#[derive(Parser)]
#[command(name = "secret-santa")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate inputs and draw new assignments
    Generate {
        /// Participant file (CSV/TSV); prompted for when omitted
        #[arg(short, long, value_name = "FILE")]
        employees: Option<PathBuf>,

        /// Previous year's assignment file, whose pairings must not repeat
        #[arg(short, long, value_name = "FILE")]
        previous: Option<PathBuf>,

        /// Output path (default: secret_santa_assignments_<timestamp>.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Seed for a reproducible draw
        #[arg(long, env = "SECRET_SANTA_SEED")]
        seed: Option<u64>,

        /// Shuffles to try before giving up
        #[arg(long, env = "SECRET_SANTA_MAX_ATTEMPTS", default_value_t = secret_santa::MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Never prompt for missing file names
        #[arg(long)]
        no_prompt: bool,
    },

    /// Check an input file without drawing
    Validate {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Which required columns to check for (employees, previous)
        #[arg(short, long, default_value = "employees")]
        kind: FileKind,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
