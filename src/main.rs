//! T9 Decoder - Main entrypoint.
//!
//! Loads configuration and the dictionary, reads digit sequences from the
//! command line or stdin, and prints every word each sequence could spell.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use t9_decoder_lib::cli::{display, input};
use t9_decoder_lib::config::output::OutputFormat;
use t9_decoder_lib::config::{self, ConfigLoader, LogConfig, T9Config, Validate};
use t9_decoder_lib::dictionary::{self, FileWordSource};
use t9_decoder_lib::error::{
    report_error, set_error_reporter, ErrorContext, T9Error, T9Result, TracingErrorReporter,
};
use t9_decoder_lib::{t9, T9Decoder};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Command line arguments for the T9 decoder.
#[derive(Parser, Debug)]
#[clap(name = "t9_decoder", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Word list to load, overriding the configured path
    #[clap(short, long, value_parser, global = true)]
    dictionary: Option<PathBuf>,

    /// Output format (text or json), overriding the configured format
    #[clap(short, long, value_parser, global = true)]
    format: Option<OutputFormat>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Decode digit sequences (read from stdin when none are given)
    Decode {
        /// Digit sequences to decode
        digits: Vec<String>,
    },

    /// Print the digit sequence typed for each word
    Encode {
        /// Words to encode
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Validate the configuration
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Decode { .. } => "decode",
            Command::Encode { .. } => "encode",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Loads configuration and applies command-line overrides.
fn load_config(args: &Args) -> T9Result<T9Config> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::new(Some(path), config::ENV_PREFIX).load()?,
        None => config::load_default_config()?,
    };

    if let Some(path) = &args.dictionary {
        config.dictionary.path = path.clone();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    config.validate()?;

    Ok(config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so stdout carries only results.
fn init_logging(log: &LogConfig) -> T9Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };

    result.map_err(|e| T9Error::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn decode(digits: Vec<String>, config: &T9Config) -> anyhow::Result<()> {
    let queries = if digits.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("{}", input::prompt());
        }
        input::read_queries(stdin.lock()).context("Failed to read queries from stdin")?
    } else {
        input::queries_from_args(&digits)?
    };

    let source = FileWordSource::from_config(&config.dictionary);
    let trie = dictionary::load_trie(&source)
        .map_err(T9Error::from)
        .with_context(|| format!("Failed to load dictionary {}", source.path().display()))?;

    let decoder = T9Decoder::with_workers(Arc::new(trie), config.decoder.workers);
    let results = decoder.decode_batch(&queries);
    info!(
        queries = queries.len(),
        format = %config.output.format,
        "Decoded all queries"
    );

    let stdout = io::stdout();
    display::render(&mut stdout.lock(), config.output.format, &queries, &results)?;
    Ok(())
}

fn encode(words: Vec<String>) -> anyhow::Result<()> {
    let encodings: Vec<(String, Option<String>)> = words
        .into_iter()
        .map(|word| {
            let digits = t9::encode(&word.to_ascii_lowercase());
            (word, digits)
        })
        .collect();

    let stdout = io::stdout();
    display::render_encodings(&mut stdout.lock(), &encodings).map_err(T9Error::from)?;
    Ok(())
}

fn gen_config(output: PathBuf) -> anyhow::Result<()> {
    info!("Generating default configuration");
    let default_config = T9Config::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(T9Error::Io)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| T9Error::Custom(format!("Failed to serialize config: {e}")))?;

    std::fs::write(&output, toml)
        .map_err(T9Error::Io)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(command: Command, config: &T9Config) -> anyhow::Result<()> {
    match command {
        Command::Decode { digits } => decode(digits, config),
        Command::Encode { words } => encode(words),
        Command::Validate => {
            info!("Configuration validated successfully");
            writeln!(io::stdout(), "Configuration is valid").map_err(T9Error::Io)?;
            Ok(())
        }
        Command::GenConfig { output } => gen_config(output),
    }
}

/// Reports a failed command through the global error reporter.
fn report_failure(err: anyhow::Error, component: &str) {
    let details = format!("{err:#}");
    let error = match err.downcast::<T9Error>() {
        Ok(error) => error,
        Err(other) => T9Error::Custom(other.to_string()),
    };
    report_error(
        ErrorContext::new(error, component)
            .with_details(details)
            .with_span_trace(),
    );
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    // Logging needs the configuration, so config errors fall back to stderr.
    let config = match load_config(&args) {
        Ok(config) => config::init_global_config(config),
        Err(e) => {
            report_error(ErrorContext::new(e, "config"));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.log) {
        report_error(ErrorContext::new(e, "logging"));
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Decode { digits: Vec::new() });
    let name = command.name();
    let span = tracing::info_span!("command", name);
    let _guard = span.enter();

    match run(command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(err, name);
            ExitCode::FAILURE
        }
    }
}
