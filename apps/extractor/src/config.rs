use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::ExtractError;

/// Which entity recognizer backs the name extractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RecognizerBackend {
    #[default]
    Heuristic,
    Llm,
}

impl FromStr for RecognizerBackend {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(RecognizerBackend::Heuristic),
            "llm" => Ok(RecognizerBackend::Llm),
            other => Err(ExtractError::Config(format!(
                "NAME_RECOGNIZER must be 'heuristic' or 'llm', got '{other}'"
            ))),
        }
    }
}

/// Runtime configuration loaded from environment variables.
/// Command-line flags are applied on top by `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub recognizer: RecognizerBackend,
    pub anthropic_api_key: Option<String>,
    pub vocabulary_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ExtractError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ExtractError> {
        let recognizer = match lookup("NAME_RECOGNIZER") {
            Some(value) => value.parse()?,
            None => RecognizerBackend::default(),
        };

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "warn".to_string()),
            recognizer,
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            vocabulary_path: lookup("RESUME_VOCABULARY").map(PathBuf::from),
        })
    }

    /// Returns the API key, failing when the LLM recognizer was selected without one.
    pub fn require_api_key(&self) -> Result<&str, ExtractError> {
        self.anthropic_api_key.as_deref().ok_or_else(|| {
            ExtractError::Config(
                "Required environment variable 'ANTHROPIC_API_KEY' is not set".to_string(),
            )
        })
    }
}
