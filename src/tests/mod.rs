//! Test modules for the T9 decoder.
//!
//! Unit tests live next to the code they cover. This module holds the tests
//! that span modules (configuration layering, error reporting) and the shared
//! fixtures and proptest strategies they use.

pub mod error_tests;
pub mod test_utils;

pub use test_utils::{digits_strategy, word_strategy, TestFixture};
