//! Export formats

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

/// Text encodings a template can be exported to and imported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Full record, pretty-printed
    Json,
    /// Attribute table only
    Csv,
    /// Full record as XML 1.0
    Xml,
}

impl ExportFormat {
    /// All formats
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Xml];

    /// Canonical file extension (without dot)
    #[inline]
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xml => "xml",
        }
    }

    /// Whether the format carries name, category and description
    ///
    /// CSV only captures the attribute table.
    #[inline]
    #[must_use]
    pub const fn carries_header(self) -> bool {
        !matches!(self, Self::Csv)
    }

    /// Format for an extension (case-insensitive, without dot)
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(ext))
    }

    /// Format implied by a path's extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Download file name for a template called `name`
    #[must_use]
    pub fn file_name_for(self, name: &str) -> String {
        let stem = name.trim();
        let stem = if stem.is_empty() { "template" } else { stem };
        format!("{stem}.{}", self.extension())
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Unrecognised format name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format: '{0}' (expected json, csv or xml)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_extension(s.trim_start_matches('.')).ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_dotted_extensions() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(".csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn infers_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("out/PumpA.XML")), Some(ExportFormat::Xml));
        assert_eq!(ExportFormat::from_path(Path::new("PumpA")), None);
    }

    #[test]
    fn file_names_fall_back_for_blank_names() {
        assert_eq!(ExportFormat::Csv.file_name_for("PumpA"), "PumpA.csv");
        assert_eq!(ExportFormat::Xml.file_name_for("  "), "template.xml");
    }

    #[test]
    fn only_csv_drops_header_fields() {
        assert!(ExportFormat::Json.carries_header());
        assert!(ExportFormat::Xml.carries_header());
        assert!(!ExportFormat::Csv.carries_header());
    }
}
