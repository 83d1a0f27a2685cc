use serde::{Deserialize, Serialize};

/// One labeled version of a code sample (e.g. the same snippet in ES5 and ES6).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VariantSpec {
    /// Tab caption and selection key, e.g. "ES6".
    pub label: String,
    /// Highlighting hint passed through to the code block, e.g. "javascript".
    pub content_type: String,
    /// Literal sample text. Whitespace is significant.
    pub raw_text: String,
}

impl VariantSpec {
    pub fn new(
        label: impl Into<String>,
        content_type: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            content_type: content_type.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// Parse a content manifest: a JSON array of variants in display order.
pub fn variants_from_json(json: &str) -> serde_json::Result<Vec<VariantSpec>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_uses_camel_case_keys() {
        let json = r#"[
            {"label": "ES5", "contentType": "javascript", "rawText": "var a = 1;"},
            {"label": "ES6", "contentType": "javascript", "rawText": "const a = 1;"}
        ]"#;

        let variants = variants_from_json(json).unwrap();

        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0], VariantSpec::new("ES5", "javascript", "var a = 1;"));
        assert_eq!(variants[1].label, "ES6");
    }

    #[test]
    fn test_manifest_missing_field_is_error() {
        let json = r#"[{"label": "ES5", "rawText": "var a = 1;"}]"#;
        assert!(variants_from_json(json).is_err());
    }
}
