//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::dictionary::DictionaryError;
use crate::error::{ErrorContext, ErrorReporter, T9Error};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = T9Error::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors carry their source message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let t9_error = T9Error::Io(io_error);
    assert!(t9_error.to_string().contains("file not found"));

    let t9_error: T9Error = ConfigError::ValidationError("bad level".to_string()).into();
    assert_eq!(
        t9_error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );

    let t9_error: T9Error = DictionaryError::NotFound(PathBuf::from("words.txt")).into();
    assert_eq!(
        t9_error.to_string(),
        "Dictionary error: Dictionary file not found: words.txt"
    );
}

/// Test the message shown for a rejected query.
#[test]
fn test_invalid_query_message() {
    let error = T9Error::InvalidQuery("12a".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid query '12a': input can contain only digits 0-9"
    );
}

/// Test that a dictionary read error exposes the IO error as its source.
#[test]
fn test_dictionary_read_source() {
    let error = DictionaryError::Read {
        path: PathBuf::from("words.txt"),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
    };

    let source = std::error::Error::source(&error).expect("source should be set");
    assert_eq!(source.to_string(), "bad utf-8");
    assert!(error.to_string().contains("words.txt"));
}

/// Test that the span trace is only attached when one was captured.
#[test]
fn test_span_trace_without_error_layer() {
    let context = ErrorContext::new(T9Error::Custom("x".into()), "test").with_span_trace();
    assert!(context.trace.is_none());

    let context = context.with_trace("frame 0");
    assert_eq!(context.trace.as_deref(), Some("frame 0"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
    components: Mutex<Vec<String>>,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut components) = self.components.lock() {
            components.push(context.component);
        }
    }
}

/// Test that reporters receive the full context.
#[test]
fn test_error_reporter() {
    let reporter = MockErrorReporter::default();

    reporter.report(ErrorContext::new(T9Error::Custom("one".into()), "config"));
    reporter.report(ErrorContext::new(T9Error::Custom("two".into()), "decode"));

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 2);
    assert_eq!(
        *reporter.components.lock().unwrap(),
        vec!["config".to_string(), "decode".to_string()]
    );
}
