//! Template attributes
//!
//! An [`Attribute`] is one named, typed field inside a template. It has no
//! identity outside the template that owns it.

use serde::{Deserialize, Serialize};

/// One named, typed field within a template
///
/// `data_type` is expected to name a catalog data type (for example
/// `AI_REAL`) but this is not enforced here. It serializes as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name, unique within its template by convention
    pub name: String,

    /// Catalog data type name
    #[serde(rename = "type")]
    pub data_type: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Attribute {
    /// Create attribute with an empty description
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            description: String::new(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Both name and data type are present
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.data_type.trim().is_empty()
    }

    /// Description is present
    #[inline]
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}
