//! Decoder configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound on batch worker threads.
const MAX_WORKERS: usize = 1024;

/// Decoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Maximum number of threads used to decode a batch of queries
    pub workers: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
        }
    }
}

impl Validate for DecoderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ConfigError::ValueOutOfRange {
                key: "decoder.workers".to_string(),
                message: format!("must be between 1 and {MAX_WORKERS}"),
            });
        }
        Ok(())
    }
}
