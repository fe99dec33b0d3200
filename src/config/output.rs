//! Output configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How decode results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block per query, one word per indented line
    #[default]
    Text,
    /// A JSON array of `{ digits, words }` objects
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

/// Result output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Rendering format
    pub format: OutputFormat,
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
