//! Example: draw assignments for a participant file.
//!
//! Usage:
//!   cargo run --example draw -- <employees.csv> [previous.csv]

use std::env;

use secret_santa::SecretSanta;

fn main() -> secret_santa::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example draw -- <employees.csv> [previous.csv]");
        std::process::exit(1);
    }

    let santa = SecretSanta::new();
    let participants = santa.load_participants(&args[1])?;
    let previous = match args.get(2) {
        Some(path) => santa.load_previous(path)?.items,
        None => Vec::new(),
    };

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!(
        "Secret Santa draw: {} participants, {} previous pairings",
        participants.items.len(),
        previous.len()
    );
    println!("{}", separator);

    for a in santa.draw(&participants.items, &previous)? {
        println!("{:25} -> {}", a.giver_name, a.receiver_name);
    }

    Ok(())
}
