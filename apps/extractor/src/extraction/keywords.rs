//! Keyword-matching extractors for skills, education and work summary.

use crate::extraction::vocabulary::Vocabulary;

/// Skills from the vocabulary that occur anywhere in the text, compared
/// case-insensitively as plain substrings. Output follows vocabulary order,
/// capped at `skills_limit`.
pub fn extract_skills(text: &str, vocab: &Vocabulary) -> Vec<String> {
    let haystack = text.to_lowercase();
    vocab
        .skills
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .take(vocab.skills_limit)
        .cloned()
        .collect()
}

/// Trimmed lines containing any education keyword (case-sensitive), in document order.
pub fn extract_education(text: &str, vocab: &Vocabulary) -> Vec<String> {
    matching_lines(text, &vocab.education_keywords).collect()
}

/// Trimmed lines containing a job-title word (case-sensitive), first `work_summary_limit` only.
pub fn extract_work_summary(text: &str, vocab: &Vocabulary) -> Vec<String> {
    matching_lines(text, &vocab.job_title_words)
        .take(vocab.work_summary_limit)
        .collect()
}

fn matching_lines<'a>(
    text: &'a str,
    keywords: &'a [String],
) -> impl Iterator<Item = String> + 'a {
    text.split('\n')
        .filter(move |line| keywords.iter().any(|kw| line.contains(kw.as_str())))
        .map(|line| line.trim().to_string())
}
