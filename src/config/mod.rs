//! Configuration module for the T9 decoder.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML,
//! JSON), then environment variables. All configuration values are validated
//! for correctness before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub mod decoder;
pub mod dictionary;
pub mod output;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "T9";

/// Loads the default configuration file merged with environment variables.
///
/// A missing default file is not an error; built-in defaults are used instead.
///
/// # Returns
///
/// * `Ok(T9Config)` if the configuration was loaded and validated
/// * `Err(ConfigError)` if the file or an override is invalid
pub fn load_default_config() -> ConfigResult<T9Config> {
    let loader = ConfigLoader::new(Some(DEFAULT_CONFIG_PATH), ENV_PREFIX);

    match loader.load() {
        Err(ConfigError::FileNotFound(_)) => {
            tracing::warn!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            ConfigLoader::new(None::<&Path>, ENV_PREFIX).load()
        }
        result => result,
    }
}

/// Configuration loaded once by the binary.
static GLOBAL_CONFIG: OnceCell<T9Config> = OnceCell::new();

/// Initialize the global configuration.
///
/// Only the first call stores its value; later calls are ignored with a
/// warning and get the configuration that is already in place.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: T9Config) -> &'static T9Config {
    let mut stored = false;
    let global = GLOBAL_CONFIG.get_or_init(|| {
        stored = true;
        config
    });
    if !stored {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
    global
}

/// Get the global configuration, if it has been initialized.
pub fn global_config() -> Option<&'static T9Config> {
    GLOBAL_CONFIG.get()
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the T9 decoder.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct T9Config {
    /// Word list configuration
    pub dictionary: dictionary::DictionaryConfig,

    /// Decoder configuration
    pub decoder: decoder::DecoderConfig,

    /// Result output configuration
    pub output: output::OutputConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for T9Config {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.decoder.validate()?;
        self.output.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the T9 decoder.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(T9Config)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<T9Config> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&T9Config::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let t9_config: T9Config = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        t9_config.validate()?;
        tracing::debug!(?t9_config, "Configuration loaded");

        Ok(t9_config)
    }
}
