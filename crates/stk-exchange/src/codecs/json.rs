//! JSON template codec
//!
//! Uses serde_json; the document shape is the serde form of [`TemplateDraft`].

use super::{check_decoded, ensure_well_formed, TemplateCodec};
use crate::error::{ImportError, SerializeError};
use crate::format::ExportFormat;
use serde_json::error::Category;
use stk_model::TemplateDraft;

/// JSON codec
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl TemplateCodec for JsonCodec {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn encode(&self, draft: &TemplateDraft) -> Result<String, SerializeError> {
        ensure_well_formed(draft)?;
        Ok(serde_json::to_string_pretty(draft)?)
    }

    fn decode(&self, text: &str) -> Result<TemplateDraft, ImportError> {
        let draft: TemplateDraft = serde_json::from_str(text).map_err(|e| match e.classify() {
            Category::Data => ImportError::invalid(ExportFormat::Json, e.to_string()),
            Category::Io | Category::Syntax | Category::Eof => {
                ImportError::syntax(ExportFormat::Json, e.to_string())
            }
        })?;
        check_decoded(draft, ExportFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stk_model::Attribute;

    #[test]
    fn encodes_spec_field_names() {
        let draft = TemplateDraft::new("PumpA")
            .with_attribute(Attribute::new("Flow", "AI_REAL").with_description("Flow rate"));
        let json = JsonCodec.encode(&draft).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "PumpA");
        assert_eq!(value["category"], "");
        assert_eq!(value["attributes"][0]["type"], "AI_REAL");
        assert_eq!(value["attributes"][0]["description"], "Flow rate");
    }

    #[test]
    fn optional_fields_default_on_import() {
        let draft = JsonCodec
            .decode(r#"{"name":"PumpA","attributes":[{"name":"Flow","type":"AI_REAL"}]}"#)
            .unwrap();
        assert_eq!(draft.category, "");
        assert_eq!(draft.attributes[0].description, "");
    }

    #[test]
    fn truncated_input_is_a_syntax_error() {
        let err = JsonCodec.decode(r#"{"name":"PumpA","attri"#).unwrap_err();
        assert!(matches!(err, ImportError::Syntax { .. }), "{err}");
    }

    #[test]
    fn missing_attributes_is_invalid() {
        let err = JsonCodec.decode(r#"{"name":"PumpA"}"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidRecord { .. }), "{err}");
    }

    #[test]
    fn blank_attribute_type_is_invalid() {
        let err = JsonCodec
            .decode(r#"{"name":"PumpA","attributes":[{"name":"Flow","type":""}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("attribute #1"));
    }
}
