//! Command-line arguments and tracing setup.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, RecognizerBackend};

/// Extract name, contact details, skills, education and work history from a resume PDF.
#[derive(Debug, Parser)]
#[command(name = "resume-extractor", version, long_about = None)]
pub struct Cli {
    /// Path to the resume PDF.
    pub path: Option<PathBuf>,

    /// Entity recognizer used for the name field (overrides NAME_RECOGNIZER).
    #[arg(long, value_enum)]
    pub recognizer: Option<RecognizerBackend>,

    /// JSON vocabulary file with keyword lists (overrides RESUME_VOCABULARY).
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Pretty-print the JSON record instead of a single line.
    #[arg(long)]
    pub pretty: bool,

    /// Log format on stderr.
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Applies command-line overrides on top of the environment configuration.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(backend) = self.recognizer {
            config.recognizer = backend;
        }
        if let Some(path) = &self.vocabulary {
            config.vocabulary_path = Some(path.clone());
        }
        config
    }
}

/// Initializes tracing on stderr; stdout carries only the JSON record.
pub fn init_tracing(cli: &Cli, config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match cli.verbose {
        0 => config.rust_log.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("resume_extractor={level}")));

    match cli.log_format {
        LogFormat::Text => fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
