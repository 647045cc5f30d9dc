use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::ExtractError;
use crate::llm_client::LlmClient;
use crate::recognizer::prompts::{ENTITY_PROMPT, ENTITY_SYSTEM};
use crate::recognizer::{EntityRecognizer, EntitySpan};

/// Shape of the model's reply.
#[derive(Debug, Deserialize)]
pub(crate) struct RecognizedEntities {
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
}

/// Semantic recognizer via Claude. A failed call is an `ExtractionFault`,
/// never an empty entity list.
pub struct LlmRecognizer {
    llm: LlmClient,
}

impl LlmRecognizer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl EntityRecognizer for LlmRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, ExtractError> {
        let prompt = build_prompt(text);
        let reply: RecognizedEntities = self.llm.call_json(&prompt, ENTITY_SYSTEM).await?;
        debug!("LLM recognizer returned {} entities", reply.entities.len());
        Ok(reply.entities)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

fn build_prompt(text: &str) -> String {
    ENTITY_PROMPT.replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_reply;
    use crate::recognizer::EntityLabel;

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = build_prompt("Jane Doe\nEngineer");
        assert!(prompt.contains("Jane Doe\nEngineer"));
        assert!(!prompt.contains("{text}"));
    }

    #[test]
    fn test_reply_preserves_entity_order() {
        let reply = "```json\n{\"entities\": [\
            {\"label\": \"ORG\", \"text\": \"Acme Corp\"},\
            {\"label\": \"PERSON\", \"text\": \"Jane Doe\"},\
            {\"label\": \"PERSON\", \"text\": \"John Roe\"}\
        ]}\n```";
        let parsed: RecognizedEntities = parse_json_reply(reply).unwrap();
        let labels: Vec<_> = parsed.entities.iter().map(|e| e.label.clone()).collect();
        assert_eq!(
            labels,
            vec![EntityLabel::Organization, EntityLabel::Person, EntityLabel::Person]
        );
        assert_eq!(parsed.entities[1].text, "Jane Doe");
    }

    #[test]
    fn test_reply_without_entities_key_is_empty() {
        let parsed: RecognizedEntities = parse_json_reply("{}").unwrap();
        assert!(parsed.entities.is_empty());
    }
}
