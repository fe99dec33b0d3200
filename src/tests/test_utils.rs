//! Test utilities and fixtures for the T9 decoder.
//!
//! This module provides reusable test components: a temporary-directory
//! fixture that also cleans up environment overrides, and proptest strategies
//! for words and digit sequences.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use tempfile::TempDir;

/// Generate a strategy for lowercase keypad words.
///
/// # Parameters
///
/// * `max_length` - The maximum length of the generated words.
pub fn word_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), 1..=max_length)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for digit sequences over the lettered keys 2-9.
pub fn digits_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::range('2', '9'), 1..=max_length)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Test fixture for tests that touch files or the environment.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file with the given name inside the fixture directory.
    ///
    /// # Returns
    ///
    /// The path of the written file.
    pub fn write_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
