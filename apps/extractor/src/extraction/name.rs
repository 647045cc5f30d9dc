use crate::errors::ExtractError;
use crate::recognizer::{EntityLabel, EntityRecognizer};

/// Text of the first `PERSON` entity the recognizer reports, or an empty string.
///
/// No ranking is applied: a reference's name listed before the candidate's wins.
pub async fn extract_name(
    text: &str,
    recognizer: &dyn EntityRecognizer,
) -> Result<String, ExtractError> {
    let spans = recognizer.recognize(text).await?;
    Ok(spans
        .into_iter()
        .find(|span| span.label == EntityLabel::Person)
        .map(|span| span.text)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::{EntitySpan, StaticRecognizer};

    #[tokio::test]
    async fn test_first_person_wins() {
        let recognizer = StaticRecognizer::with_spans(vec![
            EntitySpan::new(EntityLabel::Organization, "Acme Corp"),
            EntitySpan::new(EntityLabel::Person, "Jane Doe"),
            EntitySpan::new(EntityLabel::Person, "John Roe"),
        ]);
        assert_eq!(extract_name("ignored", &recognizer).await.unwrap(), "Jane Doe");
    }

    #[tokio::test]
    async fn test_no_person_is_empty_string() {
        let recognizer = StaticRecognizer::with_spans(vec![EntitySpan::new(
            EntityLabel::Other("GPE".to_string()),
            "Berlin",
        )]);
        assert_eq!(extract_name("ignored", &recognizer).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_recognizer_failure_propagates() {
        let err = extract_name("ignored", &StaticRecognizer::failing())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFault(_)));
    }
}
