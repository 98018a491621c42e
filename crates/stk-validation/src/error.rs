//! Error types for validation
//!
//! Findings are data, not errors. The types here cover:
//! - Blocking requiredness failures that prevent a save
//! - Invalid validator configuration

use stk_model::TemplateDraft;

/// Blocking validation failure
///
/// Only these two conditions abort a save; every other check is reported as
/// a [`crate::Finding`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Template name is empty
    #[error("template name is required")]
    MissingName,

    /// Template has no attributes
    #[error("template '{name}' has no attributes; at least one is required")]
    NoAttributes { name: String },
}

/// Reject drafts that may not be saved
///
/// # Errors
/// - `ValidationError::MissingName` if the name is blank
/// - `ValidationError::NoAttributes` if the attribute list is empty
pub fn require_savable(draft: &TemplateDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if draft.attributes.is_empty() {
        return Err(ValidationError::NoAttributes {
            name: draft.name.clone(),
        });
    }
    Ok(())
}

/// Validator configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML syntax or shape error
    #[error("invalid validator config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Semantically invalid value
    #[error("invalid validator config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use stk_model::Attribute;

    #[test]
    fn blank_name_is_blocking() {
        let draft = TemplateDraft::new("   ").with_attribute(Attribute::new("Flow", "AI_REAL"));
        assert_eq!(require_savable(&draft), Err(ValidationError::MissingName));
    }

    #[test]
    fn empty_attributes_are_blocking() {
        let draft = TemplateDraft::new("PumpA");
        assert!(matches!(
            require_savable(&draft),
            Err(ValidationError::NoAttributes { .. })
        ));
    }

    #[test]
    fn name_checked_before_attributes() {
        assert_eq!(
            require_savable(&TemplateDraft::default()),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn complete_draft_is_savable() {
        let draft = TemplateDraft::new("PumpA").with_attribute(Attribute::new("Flow", "AI_REAL"));
        assert!(require_savable(&draft).is_ok());
    }

    #[test]
    fn error_display() {
        let err = ValidationError::NoAttributes { name: "PumpA".into() };
        assert_eq!(
            err.to_string(),
            "template 'PumpA' has no attributes; at least one is required"
        );
    }
}
