//! Entity recognition — pluggable, trait-based named-entity lookup.
//!
//! Default: `HeuristicRecognizer` (offline, deterministic, no model to load).
//! Optional: `LlmRecognizer` (Claude via `LlmClient`), selected with
//! `NAME_RECOGNIZER=llm` or `--recognizer llm`.
//!
//! The recognizer is built once in `main` and handed to the pipeline as
//! `&dyn EntityRecognizer`, so tests can swap in a fixed-output double.

pub mod llm;
pub mod prompts;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{Config, RecognizerBackend};
use crate::errors::ExtractError;
use crate::llm_client::LlmClient;

pub use llm::LlmRecognizer;

// ────────────────────────────────────────────────────────────────────────────
// Entity data model
// ────────────────────────────────────────────────────────────────────────────

/// Entity type as reported by a recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Person,
    Organization,
    Other(String),
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "PERSON" | "PER" => EntityLabel::Person,
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            _ => EntityLabel::Other(label),
        }
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Person => f.write_str("PERSON"),
            EntityLabel::Organization => f.write_str("ORG"),
            EntityLabel::Other(label) => f.write_str(label),
        }
    }
}

/// A recognized entity: its label and the surface text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub text: String,
}

impl EntitySpan {
    pub fn new(label: EntityLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Returns entities in the order the backend reports them (first occurrence first).
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, ExtractError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Builds the recognizer selected by configuration. Called once at startup.
pub fn build_recognizer(config: &Config) -> Result<Box<dyn EntityRecognizer>, ExtractError> {
    let recognizer: Box<dyn EntityRecognizer> = match config.recognizer {
        RecognizerBackend::Heuristic => Box::new(HeuristicRecognizer),
        RecognizerBackend::Llm => {
            let api_key = config.require_api_key()?.to_string();
            Box::new(LlmRecognizer::new(LlmClient::new(api_key)?))
        }
    };
    info!("Entity recognizer initialized (backend: {})", recognizer.backend());
    Ok(recognizer)
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicRecognizer
// ────────────────────────────────────────────────────────────────────────────

const MIN_RUN: usize = 2;
const MAX_RUN: usize = 4;

/// Words that turn a capitalized run into an organisation.
const ORG_MARKERS: &[&str] = &[
    "university", "college", "institute", "school", "academy", "inc", "ltd", "llc", "llp",
    "corp", "corporation", "company", "technologies", "solutions", "labs", "group", "bank",
    "systems", "consulting",
];

/// Words that rule a capitalized run out as a person name: section
/// headings, job words, degree words, common tech terms.
const NON_NAME_WORDS: &[&str] = &[
    "resume", "curriculum", "vitae", "cv", "profile", "summary", "objective", "education",
    "experience", "skills", "projects", "project", "contact", "references", "certifications",
    "languages", "achievements", "awards", "interests", "hobbies", "work", "professional",
    "technical", "personal", "details", "engineer", "developer", "manager", "software",
    "senior", "junior", "lead", "intern", "analyst", "consultant", "architect", "director",
    "bachelor", "master", "science", "technology", "engineering", "arts", "computer",
    "degree", "present", "street", "road", "avenue",
    "python", "javascript", "react", "node.js", "mongodb", "docker", "aws", "sql", "java",
    "native", "cloud", "data", "web", "full", "stack", "machine", "learning",
];

/// Month names and abbreviations. Only treated as a date when a number follows,
/// so "June 2019" is skipped but "June Carter" is still a name.
const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

/// Offline recognizer: runs of 2-4 title-case words on one line, in document order.
pub struct HeuristicRecognizer;

#[async_trait]
impl EntityRecognizer for HeuristicRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, ExtractError> {
        Ok(scan_capitalized_runs(text))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

fn scan_capitalized_runs(text: &str) -> Vec<EntitySpan> {
    let mut spans = Vec::new();

    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut run: Vec<&str> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let word = token.trim_end_matches([',', ';', ':', '|']);
            let closes_run = word.len() != token.len();
            let next = tokens.get(i + 1).copied();

            if is_capitalized_word(word) && !starts_date(word, next) {
                run.push(word);
                if closes_run {
                    flush_run(&mut run, &mut spans);
                }
            } else {
                flush_run(&mut run, &mut spans);
            }
        }
        flush_run(&mut run, &mut spans);
    }

    spans
}

/// `word` is a month and the following token is a day or year, e.g. `May 2021`.
fn starts_date(word: &str, next: Option<&str>) -> bool {
    let month = word.trim_end_matches('.').to_lowercase();
    MONTHS.contains(&month.as_str())
        && next.is_some_and(|n| n.starts_with(|c: char| c.is_ascii_digit()))
}

fn flush_run(run: &mut Vec<&str>, spans: &mut Vec<EntitySpan>) {
    if (MIN_RUN..=MAX_RUN).contains(&run.len()) {
        if let Some(label) = classify_run(run) {
            spans.push(EntitySpan::new(label, run.join(" ")));
        }
    }
    run.clear();
}

fn classify_run(run: &[&str]) -> Option<EntityLabel> {
    let normalized: Vec<String> = run
        .iter()
        .map(|w| w.trim_end_matches('.').to_lowercase())
        .collect();

    if normalized.iter().any(|w| ORG_MARKERS.contains(&w.as_str())) {
        Some(EntityLabel::Organization)
    } else if normalized.iter().any(|w| NON_NAME_WORDS.contains(&w.as_str())) {
        None
    } else {
        Some(EntityLabel::Person)
    }
}

/// `Jane`, `O'Neil`, `Smith-Jones`, `J.` or an all-caps header word like `DOE`.
fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    let allowed = rest
        .iter()
        .all(|c| c.is_alphabetic() || matches!(c, '-' | '\'' | '.'));
    let letters = rest.iter().filter(|c| c.is_alphabetic()).count();

    allowed && (letters > 0 || rest == ['.'])
}

// ────────────────────────────────────────────────────────────────────────────
// Test double
// ────────────────────────────────────────────────────────────────────────────

/// Returns a fixed span list regardless of input, or a fixed failure.
#[cfg(test)]
pub struct StaticRecognizer {
    pub spans: Vec<EntitySpan>,
    pub fail: bool,
}

#[cfg(test)]
impl StaticRecognizer {
    pub fn with_spans(spans: Vec<EntitySpan>) -> Self {
        Self { spans, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            spans: vec![],
            fail: true,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl EntityRecognizer for StaticRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, ExtractError> {
        if self.fail {
            return Err(ExtractError::ExtractionFault(
                "static recognizer configured to fail".to_string(),
            ));
        }
        Ok(self.spans.clone())
    }

    fn backend(&self) -> &'static str {
        "static"
    }
}
