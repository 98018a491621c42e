//! Validator configuration
//!
//! All thresholds and word lists are data so deployments can tune them from
//! a TOML file without code changes.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Validator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Attribute count above which a performance warning is raised
    pub max_attributes: usize,

    /// Attribute names reserved by the runtime (case-insensitive)
    pub reserved_words: Vec<String>,

    /// Name fragments that mark an attribute as sensitive
    pub sensitive_markers: Vec<String>,

    /// Name/type fragments that mark a quality attribute
    pub quality_markers: Vec<String>,

    /// Name fragments that mark a security classification attribute
    pub classification_markers: Vec<String>,

    /// Placeholder inserted by auto-fix; `{name}` is the attribute name
    pub description_placeholder: String,

    /// Warn on attribute types missing from the catalog
    pub check_catalog_types: bool,
}

impl ValidatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With attribute count threshold
    #[inline]
    #[must_use]
    pub fn with_max_attributes(mut self, max: usize) -> Self {
        self.max_attributes = max;
        self
    }

    /// Parse from TOML and check values
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or a value is out of range
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.check()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` on a zero threshold or blank placeholder
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.max_attributes == 0 {
            return Err(ConfigError::Invalid("max_attributes must be > 0".into()));
        }
        if self.description_placeholder.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "description_placeholder must not be blank".into(),
            ));
        }
        Ok(())
    }

    /// Placeholder description for `attribute`
    #[must_use]
    pub fn placeholder_for(&self, attribute: &str) -> String {
        self.description_placeholder.replace("{name}", attribute)
    }

    pub(crate) fn is_reserved(&self, name: &str) -> bool {
        let name = name.trim();
        self.reserved_words
            .iter()
            .any(|w| w.eq_ignore_ascii_case(name))
    }

    pub(crate) fn is_sensitive(&self, name: &str) -> bool {
        contains_any(name, &self.sensitive_markers)
    }

    pub(crate) fn is_quality(&self, name: &str, data_type: &str) -> bool {
        contains_any(name, &self.quality_markers) || contains_any(data_type, &self.quality_markers)
    }

    pub(crate) fn is_classification_name(&self, name: &str) -> bool {
        contains_any(name, &self.classification_markers)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_attributes: 50,
            reserved_words: to_strings(&[
                "Tagname",
                "ShortDesc",
                "Area",
                "Container",
                "Host",
                "Category",
                "SecurityGroup",
                "ScanState",
            ]),
            sensitive_markers: to_strings(&[
                "password",
                "passwd",
                "secret",
                "token",
                "credential",
                "apikey",
            ]),
            quality_markers: to_strings(&["quality"]),
            classification_markers: to_strings(&["classification"]),
            description_placeholder: "Description for {name}".to_string(),
            check_catalog_types: true,
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn contains_any(haystack: &str, markers: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    markers
        .iter()
        .any(|m| !m.is_empty() && haystack.contains(&m.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ValidatorConfig::default();
        assert_eq!(config.max_attributes, 50);
        assert!(config.check().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ValidatorConfig::from_toml_str("max_attributes = 10\n").unwrap();
        assert_eq!(config.max_attributes, 10);
        assert_eq!(config.reserved_words, ValidatorConfig::default().reserved_words);
    }

    #[test]
    fn zero_threshold_rejected() {
        let result = ValidatorConfig::from_toml_str("max_attributes = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_toml_rejected() {
        let result = ValidatorConfig::from_toml_str("max_attributes = [");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn marker_matching_is_case_insensitive() {
        let config = ValidatorConfig::default();
        assert!(config.is_sensitive("AdminPassword"));
        assert!(config.is_sensitive("API_SECRET"));
        assert!(!config.is_sensitive("Flow"));
        assert!(config.is_quality("FlowQ", "AI_QUALITY"));
        assert!(config.is_reserved("tagname"));
        assert!(!config.is_reserved("TagnameAlias"));
    }

    #[test]
    fn placeholder_substitutes_name() {
        let config = ValidatorConfig::default();
        assert_eq!(config.placeholder_for("Flow"), "Description for Flow");
    }
}
