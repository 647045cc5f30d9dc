mod cli;
mod config;
mod document;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod pipeline;
mod recognizer;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::document::PdfTextSource;
use crate::errors::ExtractError;
use crate::extraction::Vocabulary;
use crate::pipeline::extract_resume;
use crate::recognizer::build_recognizer;

// One document per run, nothing to parallelize: a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // A missing path is reported before any configuration problem.
    let path = cli.path.as_deref().ok_or(ExtractError::MissingArgument)?;
    let config = cli.apply_to(Config::from_env()?);

    cli::init_tracing(&cli, &config);
    info!("Starting resume-extractor v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = match &config.vocabulary_path {
        Some(vocab_path) => Vocabulary::from_path(vocab_path)?,
        None => Vocabulary::default(),
    };

    // Recognizer setup happens once, before the document is touched.
    let recognizer = build_recognizer(&config)?;

    let record = extract_resume(path, &PdfTextSource, recognizer.as_ref(), &vocabulary).await?;

    println!("{}", record.to_json(cli.pretty)?);
    Ok(())
}
