use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ExtractError;

const EDUCATION_KEYWORDS: &[&str] = &["B.Tech", "MBA", "Bachelor", "Master", "B.Sc", "M.Sc", "PhD"];

const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "MongoDB",
    "Docker",
    "AWS",
    "SQL",
    "Java",
];

const JOB_TITLE_WORDS: &[&str] = &["Engineer", "Developer", "Manager"];

const SKILLS_LIMIT: usize = 5;
const WORK_SUMMARY_LIMIT: usize = 5;

/// Keyword lists and caps consumed by the keyword-based field extractors.
///
/// Loaded from JSON when a vocabulary file is configured; any key absent
/// from the file keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Case-sensitive substrings marking an education line.
    pub education_keywords: Vec<String>,
    /// Ordered skill list, matched case-insensitively. Output follows this order.
    pub skills: Vec<String>,
    /// Case-sensitive substrings marking a work-experience line.
    pub job_title_words: Vec<String>,
    pub skills_limit: usize,
    pub work_summary_limit: usize,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            education_keywords: to_owned(EDUCATION_KEYWORDS),
            skills: to_owned(SKILLS),
            job_title_words: to_owned(JOB_TITLE_WORDS),
            skills_limit: SKILLS_LIMIT,
            work_summary_limit: WORK_SUMMARY_LIMIT,
        }
    }
}

impl Vocabulary {
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let invalid = |reason: String| ExtractError::Vocabulary {
            path: path.to_path_buf(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let vocabulary: Vocabulary =
            serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?;

        info!(
            "Loaded vocabulary from {}: {} education keywords, {} skills, {} job-title words",
            path.display(),
            vocabulary.education_keywords.len(),
            vocabulary.skills.len(),
            vocabulary.job_title_words.len()
        );
        Ok(vocabulary)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
