//! Dictionary error module.
//!
//! Errors raised while reading a word list. The trie itself never fails to
//! build; only getting the words can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word list file does not exist.
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),

    /// The word list exists but could not be read.
    #[error("Failed to read dictionary {path}: {source}")]
    Read {
        /// Path of the word list
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
