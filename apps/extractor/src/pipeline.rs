//! Extraction pipeline: document path → text → field extractors → one record.
//!
//! Each extractor reads the same immutable text and none depends on another,
//! so evaluation order carries no meaning. The only fallible extractor is the
//! name lookup; its failure aborts the run rather than yielding a partial record.

use std::path::Path;

use tracing::{debug, info};

use crate::document::TextSource;
use crate::errors::ExtractError;
use crate::extraction::{
    extract_education, extract_email, extract_name, extract_phone, extract_skills,
    extract_work_summary, Vocabulary,
};
use crate::models::ExtractionResult;
use crate::recognizer::EntityRecognizer;

/// Runs every field extractor against `text` and assembles the record.
pub async fn assemble_record(
    text: &str,
    recognizer: &dyn EntityRecognizer,
    vocab: &Vocabulary,
) -> Result<ExtractionResult, ExtractError> {
    let record = ExtractionResult {
        name: extract_name(text, recognizer).await?,
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text, vocab),
        education: extract_education(text, vocab),
        work_experience_summary: extract_work_summary(text, vocab),
    };

    debug!(
        "Assembled record: name_found={}, email_found={}, phone_found={}, skills={}, education={}, work={}",
        !record.name.is_empty(),
        !record.email.is_empty(),
        !record.phone.is_empty(),
        record.skills.len(),
        record.education.len(),
        record.work_experience_summary.len()
    );

    Ok(record)
}

/// Reads the document at `path` and extracts its record.
pub async fn extract_resume(
    path: &Path,
    source: &dyn TextSource,
    recognizer: &dyn EntityRecognizer,
    vocab: &Vocabulary,
) -> Result<ExtractionResult, ExtractError> {
    let text = source.extract(path)?;
    info!("Extracting fields from {} ({} chars)", path.display(), text.chars().count());
    assemble_record(&text, recognizer, vocab).await
}
