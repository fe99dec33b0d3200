//! Dictionary configuration module.
//!
//! Where the word list lives and how its lines are normalized.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default word list location, one word per line.
pub const DEFAULT_DICTIONARY_PATH: &str = "resources/words.txt";

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path of the word list file
    pub path: PathBuf,

    /// Whether to lowercase ASCII letters in each word before insertion
    pub lowercase: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            lowercase: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
