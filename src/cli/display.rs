//! Result rendering.
//!
//! Text output labels each query and lists one word per tab-indented line,
//! printing `No result.` when nothing matched. JSON output is an array of
//! `{ "digits": ..., "words": [...] }` objects.

use std::io::Write;

use serde::Serialize;

use crate::config::output::OutputFormat;
use crate::error::T9Result;

/// Line printed under a query with no matching words.
pub const NO_RESULT: &str = "No result.";

/// One decoded query, as serialized to JSON.
#[derive(Debug, Serialize)]
pub struct QueryResult<'a> {
    /// The digit sequence as typed
    pub digits: &'a str,
    /// Matching words in search order
    pub words: &'a [String],
}

/// Writes decode results in the requested format.
///
/// `queries` and `results` are paired by position.
pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    queries: &[String],
    results: &[Vec<String>],
) -> T9Result<()> {
    match format {
        OutputFormat::Text => render_text(out, queries, results)?,
        OutputFormat::Json => render_json(out, queries, results)?,
    }
    out.flush()?;
    Ok(())
}

/// Writes results as labelled, tab-indented blocks.
pub fn render_text<W: Write>(
    out: &mut W,
    queries: &[String],
    results: &[Vec<String>],
) -> std::io::Result<()> {
    for (digits, words) in queries.iter().zip(results) {
        writeln!(out, "Possible words formed from {digits}:")?;
        if words.is_empty() {
            writeln!(out, "\t{NO_RESULT}")?;
        }
        for word in words {
            writeln!(out, "\t{word}")?;
        }
    }
    Ok(())
}

/// Writes results as a pretty-printed JSON array.
pub fn render_json<W: Write>(
    out: &mut W,
    queries: &[String],
    results: &[Vec<String>],
) -> T9Result<()> {
    let entries: Vec<QueryResult<'_>> = queries
        .iter()
        .zip(results)
        .map(|(digits, words)| QueryResult { digits, words })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the keypad encoding of each word, one `word<TAB>digits` per line.
pub fn render_encodings<W: Write>(
    out: &mut W,
    encodings: &[(String, Option<String>)],
) -> std::io::Result<()> {
    for (word, digits) in encodings {
        match digits {
            Some(digits) => writeln!(out, "{word}\t{digits}")?,
            None => writeln!(out, "{word}\t(not typeable on the keypad)")?,
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_text_layout() {
        let queries = owned(&["228", "0"]);
        let results = vec![owned(&["act", "cat"]), Vec::new()];

        let mut out = Vec::new();
        render(&mut out, OutputFormat::Text, &queries, &results).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Possible words formed from 228:\n\tact\n\tcat\n\
             Possible words formed from 0:\n\tNo result.\n"
        );
    }

    #[test]
    fn test_json_layout() {
        let queries = owned(&["43556"]);
        let results = vec![owned(&["hello"])];

        let mut out = Vec::new();
        render(&mut out, OutputFormat::Json, &queries, &results).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "digits": "43556", "words": ["hello"] }])
        );
    }

    #[test]
    fn test_encodings() {
        let encodings = vec![
            ("hello".to_string(), Some("43556".to_string())),
            ("x-ray".to_string(), None),
        ];

        let mut out = Vec::new();
        render_encodings(&mut out, &encodings).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "hello\t43556\nx-ray\t(not typeable on the keypad)\n"
        );
    }
}
