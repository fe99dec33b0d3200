//! Query input handling.
//!
//! Queries arrive either as command-line arguments or as whitespace-separated
//! tokens on stdin. Reading stdin stops at end of input or at the `-1`
//! sentinel, so several sequences can be typed on one line or many.

use std::io::BufRead;

use crate::error::{T9Error, T9Result};

/// Token that ends interactive input.
pub const END_OF_INPUT: &str = "-1";

/// Checks that `token` is a non-empty run of ASCII digits.
pub fn parse_query(token: &str) -> T9Result<String> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        Ok(token.to_string())
    } else {
        Err(T9Error::InvalidQuery(token.to_string()))
    }
}

/// Validates queries given on the command line.
pub fn queries_from_args<S: AsRef<str>>(args: &[S]) -> T9Result<Vec<String>> {
    args.iter().map(|arg| parse_query(arg.as_ref())).collect()
}

/// Reads queries from `reader` until end of input or the `-1` sentinel.
pub fn read_queries<R: BufRead>(reader: R) -> T9Result<Vec<String>> {
    let mut queries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if token == END_OF_INPUT {
                return Ok(queries);
            }
            queries.push(parse_query(token)?);
        }
    }

    Ok(queries)
}

/// Prompt printed before reading from an interactive terminal.
pub fn prompt() -> &'static str {
    "Enter T9 sequence of digits:\n\
     (For multiple sequences, separate with new line or spacebar.)\n\
     Enter -1 after last input."
}
