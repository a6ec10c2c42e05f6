//! Term count input

use std::io::{BufRead, Write};

use crate::common::{Error, Result};

pub const PROMPT: &str = "Enter the number of Fibonacci terms to generate: ";

/// Prompt for the term count and read one line
pub fn read_terms<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<i64> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_terms(&line)
}

/// Parse and validate a term count
///
/// Rejects anything that is not an integer, then anything below one.
pub fn parse_terms(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    let terms: i64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidInput(trimmed.to_string()))?;
    if terms <= 0 {
        return Err(Error::NonPositiveTerms(terms));
    }
    Ok(terms)
}
