use serde::{Deserialize, Serialize};

/// The structured record emitted for one resume.
///
/// Every field is always present. "Not found" is an empty string or an
/// empty list, never a missing key or `null`. Field order here is the
/// serialized order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub work_experience_summary: Vec<String>,
}

impl ExtractionResult {
    /// Single-line JSON, or indented JSON when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_serializes_all_keys_in_order() {
        let json = ExtractionResult::default().to_json(false).unwrap();
        assert_eq!(
            json,
            r#"{"name":"","email":"","phone":"","skills":[],"education":[],"work_experience_summary":[]}"#
        );
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let record = ExtractionResult {
            name: "Jane Doe".to_string(),
            education: vec!["B.Tech in CS".to_string()],
            ..Default::default()
        };
        assert!(!record.to_json(false).unwrap().contains('\n'));
        assert!(record.to_json(true).unwrap().contains('\n'));
    }

    #[test]
    fn test_field_order_with_values() {
        let record = ExtractionResult {
            name: "A".to_string(),
            email: "a@b.co".to_string(),
            phone: "555-123-4567".to_string(),
            skills: vec!["Python".to_string()],
            education: vec![],
            work_experience_summary: vec!["Engineer".to_string()],
        };
        let json = record.to_json(false).unwrap();
        let positions: Vec<usize> = [
            "\"name\"",
            "\"email\"",
            "\"phone\"",
            "\"skills\"",
            "\"education\"",
            "\"work_experience_summary\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
