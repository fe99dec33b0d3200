// Copyright (c) 2025 T9 Decoder Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list loading.
//!
//! A [`WordSource`] supplies the words a [`WordTrie`] is built from. Only
//! getting the words can fail; building the trie from them cannot, so a failed
//! load never leaves a half-built trie behind.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::WordTrie;
use crate::error::dictionary::DictionaryError;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Supplier of dictionary words.
#[cfg_attr(test, mockall::automock)]
pub trait WordSource {
    /// Returns every word of the dictionary, in file order.
    fn words(&self) -> DictionaryResult<Vec<String>>;
}

/// Word list stored in a text file, one word per line.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
    lowercase: bool,
}

impl FileWordSource {
    /// Creates a source reading `path`, keeping words as written.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lowercase: false,
        }
    }

    /// Creates a source from the dictionary section of the configuration.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(&config.path).lowercase(config.lowercase)
    }

    /// Sets whether ASCII letters are lowercased on read.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Path of the word list.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: std::io::Error) -> DictionaryError {
        DictionaryError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

impl WordSource for FileWordSource {
    fn words(&self) -> DictionaryResult<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DictionaryError::NotFound(self.path.clone()),
            _ => self.read_error(e),
        })?;

        let mut words = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.read_error(e))?;
            if let Some(word) = normalize_word(&line, self.lowercase) {
                words.push(word);
            }
        }

        Ok(words)
    }
}

/// Cleans one line of a word list.
///
/// Surrounding whitespace (including a trailing `\r`) is dropped and blank
/// lines yield `None`.
pub fn normalize_word(line: &str, lowercase: bool) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else if lowercase {
        Some(word.to_ascii_lowercase())
    } else {
        Some(word.to_string())
    }
}

/// Reads every word from `source` and builds the trie.
pub fn load_trie(source: &dyn WordSource) -> DictionaryResult<WordTrie> {
    let started = Instant::now();
    let words = source.words()?;
    let read = words.len();
    let trie = WordTrie::from_words(words);

    tracing::info!(
        lines = read,
        words = trie.len(),
        nodes = trie.node_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Dictionary loaded"
    );

    Ok(trie)
}
