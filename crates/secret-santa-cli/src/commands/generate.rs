//! Generate command - validate inputs and draw assignments.

use std::path::PathBuf;

use chrono::Utc;
use colored::Colorize;
use secret_santa::{
    OutputFormat, PreviousPairing, SantaConfig, SantaError, SecretSanta, default_output_path,
    write_assignments,
};

use super::print_report_errors;
use crate::prompt;

pub struct GenerateArgs {
    pub employees: Option<PathBuf>,
    pub previous: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub seed: Option<u64>,
    pub max_attempts: usize,
    pub prompt: bool,
    pub verbose: bool,
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", banner().green().bold());
    println!();

    // Fully interactive when no participant file was given
    let interactive = args.employees.is_none() && args.prompt;

    let employees = match args.employees {
        Some(path) => path,
        None if args.prompt => PathBuf::from(prompt::ask("Enter the employee CSV file name:")?),
        None => return Err("No employee file given. Pass --employees or drop --no-prompt.".into()),
    };

    let santa = SecretSanta::with_config(SantaConfig {
        max_attempts: args.max_attempts,
        seed: args.seed,
        ..SantaConfig::default()
    });

    let participants = match santa.load_participants(&employees) {
        Ok(loaded) => loaded,
        Err(e) => return Err(report_invalid(e)),
    };
    println!(
        "{} {} participants from {}",
        "Loaded".cyan().bold(),
        participants.items.len().to_string().white().bold(),
        participants.source.file.white()
    );

    let previous_path = match args.previous {
        Some(path) => Some(path),
        None if interactive => {
            let answer = prompt::ask(
                "\nEnter the previous year assignment CSV file name (or press Enter to skip):",
            )?;
            (!answer.is_empty()).then(|| PathBuf::from(answer))
        }
        None => None,
    };

    let previous: Vec<PreviousPairing> = match previous_path {
        Some(path) => match santa.load_previous(&path) {
            Ok(loaded) => {
                println!(
                    "{} {} previous pairings from {}",
                    "Loaded".cyan().bold(),
                    loaded.items.len().to_string().white().bold(),
                    loaded.source.file.white()
                );
                loaded.items
            }
            Err(e) => return Err(report_invalid(e)),
        },
        None => Vec::new(),
    };

    let assignments = santa.draw(&participants.items, &previous)?;

    if args.verbose {
        println!();
        println!("{}", "Assignments:".yellow().bold());
        for a in &assignments {
            println!("  {:20} -> {}", a.giver_name, a.receiver_name);
        }
        println!();
    }

    let output_path = args
        .output
        .unwrap_or_else(|| default_output_path(Utc::now(), args.format));
    write_assignments(&output_path, &assignments, args.format)?;

    println!(
        "{}",
        format!("Assignments saved to \"{}\"", output_path.display()).green()
    );

    Ok(())
}

/// Startup header shown before any prompt.
fn banner() -> String {
    let title = format!("  Secret Santa v{}  ", env!("CARGO_PKG_VERSION"));
    let rule = "*".repeat(title.len());
    format!("{rule}\n{title}\n{rule}")
}

/// Print validation errors line by line; other errors pass through unchanged.
fn report_invalid(error: SantaError) -> Box<dyn std::error::Error> {
    match error {
        SantaError::InvalidInput { path, report } => {
            println!(
                "{} {}",
                "Invalid input:".red().bold(),
                path.display().to_string().white()
            );
            print_report_errors(&report);
            format!("{} has {} validation error(s)", path.display(), report.errors.len()).into()
        }
        other => other.into(),
    }
}
