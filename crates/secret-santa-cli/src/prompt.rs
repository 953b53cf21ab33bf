//! Interactive line prompts on stdin.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Show `message` and return the trimmed line the user typed.
///
/// End of input yields an empty string.
pub fn ask(message: &str) -> io::Result<String> {
    let stdin = io::stdin();
    ask_from(message, &mut stdin.lock(), &mut io::stdout())
}

fn ask_from(message: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    write!(output, "{} {} ", "?".green().bold(), message.bold())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
