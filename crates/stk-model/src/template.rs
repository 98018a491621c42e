//! Template drafts and saved records
//!
//! - [`TemplateDraft`]: the structural record collected from a form, the
//!   unit of validation and serialization
//! - [`TemplateRecord`]: a saved draft with id, timestamp, size and fingerprint
//! - [`TemplateId`]: ULID assigned at save time

use crate::attribute::Attribute;
use crate::fingerprint::{Fingerprint, FingerprintError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use ulid::Ulid;

/// Unique template identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub Ulid);

impl TemplateId {
    /// Generate new template ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TemplateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TemplateId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(Self)
    }
}

/// Structural template content: name, category, description, attributes
///
/// Drafts carry no identity; they become [`TemplateRecord`]s when saved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateDraft {
    /// Template name (PascalCase by convention)
    pub name: String,

    /// Free-form category, usually a catalog type category label
    #[serde(default)]
    pub category: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Ordered attribute list
    pub attributes: Vec<Attribute>,
}

impl TemplateDraft {
    /// Create draft with a name and nothing else
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an attribute
    #[inline]
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Find attribute by name (case-insensitive)
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive substring match over name, description and category
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A saved template
///
/// Records are replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Identifier assigned at save time
    pub id: TemplateId,

    /// Structural content
    #[serde(flatten)]
    pub template: TemplateDraft,

    /// Time of the last save or replace
    pub last_modified: DateTime<Utc>,

    /// Byte length of the compact JSON encoding of `template`
    pub size_estimate: usize,

    /// Digest of the canonical JSON encoding of `template`
    pub fingerprint: Fingerprint,
}

impl TemplateRecord {
    /// Build a record for `template` with a fresh timestamp
    ///
    /// # Errors
    /// Returns error if the template cannot be encoded for fingerprinting
    pub fn new(
        id: TemplateId,
        template: TemplateDraft,
        size_estimate: usize,
    ) -> Result<Self, FingerprintError> {
        let fingerprint = Fingerprint::compute_serializable(&template)?;
        Ok(Self {
            id,
            template,
            last_modified: Utc::now(),
            size_estimate,
            fingerprint,
        })
    }

    /// Template name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.template.name
    }

    /// Template category
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.template.category
    }

    /// Attribute list
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.template.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump() -> TemplateDraft {
        TemplateDraft::new("PumpA")
            .with_category("analog")
            .with_description("Centrifugal pump")
            .with_attribute(Attribute::new("Flow", "AI_REAL"))
    }

    #[test]
    fn template_id_roundtrips_through_string() {
        let id = TemplateId::new();
        let parsed: TemplateId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn template_id_rejects_garbage() {
        assert!("not-a-ulid".parse::<TemplateId>().is_err());
    }

    #[test]
    fn draft_lookup_is_case_insensitive() {
        let draft = pump();
        assert!(draft.attribute("flow").is_some());
        assert!(draft.attribute("Pressure").is_none());
    }

    #[test]
    fn draft_matches_any_text_field() {
        let draft = pump();
        assert!(draft.matches_lowercase("pumpa"));
        assert!(draft.matches_lowercase("centrifugal"));
        assert!(draft.matches_lowercase("analog"));
        assert!(!draft.matches_lowercase("valve"));
    }

    #[test]
    fn record_fingerprint_tracks_content() {
        let a = TemplateRecord::new(TemplateId::new(), pump(), 10).unwrap();
        let b = TemplateRecord::new(TemplateId::new(), pump(), 10).unwrap();
        let c = TemplateRecord::new(TemplateId::new(), pump().with_category("digital"), 10).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_ne!(a.fingerprint, c.fingerprint);
    }

    #[test]
    fn record_serializes_flat() {
        let record = TemplateRecord::new(TemplateId::new(), pump(), 42).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "PumpA");
        assert_eq!(json["size_estimate"], 42);

        let decoded: TemplateRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, record);
    }
}
