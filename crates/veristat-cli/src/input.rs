//! Input parsing for the interactive shell
//!
//! Samples are entered as comma-separated numbers. Parse failures are
//! handled here by re-prompting; the engines only ever see fully parsed
//! finite sequences.

use std::io::{self, BufRead, Write};

use tracing::debug;

/// Parse a comma-separated list of numbers.
///
/// Every token is trimmed and parsed as `f64`; non-finite values are
/// rejected like any other malformed token. On failure the offending
/// token is returned.
pub fn parse_numbers(line: &str) -> Result<Vec<f64>, String> {
    line.split(',')
        .map(|token| {
            let token = token.trim();
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(token.to_string()),
            }
        })
        .collect()
}

/// Prompt until a well-formed sample is entered.
///
/// Returns `None` when the input stream ends.
pub fn read_sample(name: &str) -> io::Result<Option<Vec<f64>>> {
    loop {
        print!("Enter numbers for {name}, separated by commas: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_numbers(&line) {
            Ok(values) => {
                debug!(name, n = values.len(), "sample parsed");
                return Ok(Some(values));
            }
            Err(token) => {
                println!("Invalid input {token:?}. Please enter numbers separated by commas.");
            }
        }
    }
}
