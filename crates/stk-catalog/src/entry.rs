//! Catalog entry types
//!
//! Provides [`CatalogEntry`] and the [`TypeCategory`] classification.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Data type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    /// Continuous process values
    Analog,

    /// Discrete on/off values
    Digital,

    /// Text values
    String,

    /// Platform-provided values (time, quality, security)
    System,
}

impl TypeCategory {
    /// All categories in display order
    pub const ALL: [TypeCategory; 4] = [
        TypeCategory::Analog,
        TypeCategory::Digital,
        TypeCategory::String,
        TypeCategory::System,
    ];

    /// Lowercase identifier
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analog => "analog",
            Self::Digital => "digital",
            Self::String => "string",
            Self::System => "system",
        }
    }
}

impl Display for TypeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analog" => Ok(Self::Analog),
            "digital" => Ok(Self::Digital),
            "string" => Ok(Self::String),
            "system" => Ok(Self::System),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// One immutable catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Unique, stable type name (e.g. `AI_REAL`)
    pub name: &'static str,

    /// Machine classification
    #[serde(rename = "typeCategory")]
    pub type_category: TypeCategory,

    /// Human-facing category label
    #[serde(rename = "humanCategory")]
    pub human_category: &'static str,

    /// One-line description
    pub description: &'static str,
}

impl CatalogEntry {
    /// Case-insensitive substring match over name, description and human category
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [self.name, self.description, self.human_category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Catalog lookup errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Category label not recognised
    #[error("unknown type category: '{0}'")]
    UnknownCategory(String),

    /// No pre-built template under that key
    #[error("unknown pre-built template: '{0}'")]
    UnknownTemplate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Digital".parse::<TypeCategory>().unwrap(), TypeCategory::Digital);
        assert_eq!(" system ".parse::<TypeCategory>().unwrap(), TypeCategory::System);
        assert!(matches!(
            "boolean".parse::<TypeCategory>(),
            Err(CatalogError::UnknownCategory(_))
        ));
    }

    #[test]
    fn category_display_matches_as_str() {
        for category in TypeCategory::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn entry_serializes_with_camel_case_keys() {
        let entry = CatalogEntry {
            name: "DI_BOOL",
            type_category: TypeCategory::Digital,
            human_category: "Digital I/O",
            description: "Discrete input",
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["typeCategory"], "digital");
        assert_eq!(json["humanCategory"], "Digital I/O");
    }
}
