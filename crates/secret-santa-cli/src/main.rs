//! Secret Santa CLI.

mod cli;
mod commands;
mod prompt;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate {
            employees,
            previous,
            output,
            format,
            seed,
            max_attempts,
            no_prompt,
        } => commands::generate::run(commands::generate::GenerateArgs {
            employees,
            previous,
            output,
            format,
            seed,
            max_attempts,
            prompt: !no_prompt,
            verbose: cli.verbose,
        }),

        Commands::Validate { file, kind, json } => {
            commands::validate::run(file, kind, json, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
