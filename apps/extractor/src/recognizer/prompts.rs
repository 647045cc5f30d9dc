// Entity recognition LLM prompt templates.

pub const ENTITY_SYSTEM: &str = "\
You are a precise named-entity recognizer for resume text. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Report entities exactly as they appear in the text; never normalize or invent names.";

pub const ENTITY_PROMPT: &str = r#"List the named entities in the following resume text.

INPUT TEXT:
{text}

OUTPUT SCHEMA (return exactly this structure):
{
  "entities": [
    {"label": "PERSON" | "ORG" | "GPE" | "DATE" | "OTHER", "text": "string"}
  ]
}

RULES:
1. Order entities by their first appearance in the text.
2. "text" must be the exact surface text from the input.
3. Use "PERSON" only for names of people.
4. Return {"entities": []} if there are none.
5. Return ONLY the JSON object — nothing else, no code fences."#;
