//! Template codecs for the supported exchange formats
//!
//! Each codec turns a [`TemplateDraft`] into text and back:
//! - JSON via serde_json (full fidelity)
//! - CSV (attribute table only)
//! - XML via quick-xml (full fidelity)

use crate::error::{ImportError, SerializeError};
use crate::format::ExportFormat;
use std::path::Path;
use stk_model::TemplateDraft;

mod csv;
mod json;
mod xml;

pub use self::csv::{CsvCodec, CSV_HEADER};
pub use self::json::JsonCodec;
pub use self::xml::XmlCodec;

/// Codec trait for converting templates to and from text
///
/// Implement this trait to add support for new formats.
pub trait TemplateCodec: Send + Sync + 'static {
    /// Format this codec handles
    fn format(&self) -> ExportFormat;

    /// Encode a draft as text
    fn encode(&self, draft: &TemplateDraft) -> Result<String, SerializeError>;

    /// Decode text into a draft, rejecting anything that is not a whole template
    fn decode(&self, text: &str) -> Result<TemplateDraft, ImportError>;

    /// Check if this codec can handle the given path
    fn can_decode(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.format().extension()))
    }
}

/// Codec registration for dynamic format management
pub struct CodecRegistry {
    codecs: Vec<Box<dyn TemplateCodec>>,
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CodecRegistry {
    fn clone(&self) -> Self {
        // codecs are stateless
        default_codecs()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}

impl CodecRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { codecs: Vec::new() }
    }

    /// Register a codec, replacing any codec for the same format
    pub fn register<C: TemplateCodec>(&mut self, codec: C) {
        let format = codec.format();
        self.codecs.retain(|c| c.format() != format);
        self.codecs.push(Box::new(codec));
    }

    /// Codec for a format
    #[must_use]
    pub fn get(&self, format: ExportFormat) -> Option<&dyn TemplateCodec> {
        self.codecs
            .iter()
            .find(|c| c.format() == format)
            .map(|c| &**c)
    }

    /// Find codec for path
    #[must_use]
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn TemplateCodec> {
        self.codecs.iter().find(|c| c.can_decode(path)).map(|c| &**c)
    }

    /// Registered formats, in registration order
    #[must_use]
    pub fn formats(&self) -> Vec<ExportFormat> {
        self.codecs.iter().map(|c| c.format()).collect()
    }

    /// Encode with the codec for `format`
    ///
    /// # Errors
    /// `SerializeError::NoCodec` if nothing is registered for `format`,
    /// otherwise whatever the codec reports.
    pub fn encode(
        &self,
        draft: &TemplateDraft,
        format: ExportFormat,
    ) -> Result<String, SerializeError> {
        self.get(format)
            .ok_or(SerializeError::NoCodec(format))?
            .encode(draft)
    }

    /// Decode with the codec for `format`
    ///
    /// # Errors
    /// `ImportError::NoCodecForExtension` if nothing is registered for `format`,
    /// otherwise whatever the codec reports.
    pub fn decode(&self, text: &str, format: ExportFormat) -> Result<TemplateDraft, ImportError> {
        self.get(format)
            .ok_or_else(|| ImportError::NoCodecForExtension(format.extension().to_string()))?
            .decode(text)
    }
}

/// Create default codec registry with built-in codecs
#[inline]
#[must_use]
pub fn default_codecs() -> CodecRegistry {
    let mut registry = CodecRegistry::new();
    registry.register(JsonCodec);
    registry.register(CsvCodec);
    registry.register(XmlCodec);
    registry
}

/// Reject drafts whose attributes lack a name or a type
///
/// Every encoder runs this first so no format ever emits a record
/// that its own decoder would refuse.
pub fn ensure_well_formed(draft: &TemplateDraft) -> Result<(), SerializeError> {
    match draft.attributes.iter().position(|a| !a.is_complete()) {
        Some(index) => Err(SerializeError::MalformedRecord(format!(
            "attribute #{} has an empty name or type",
            index + 1
        ))),
        None => Ok(()),
    }
}

/// Import-side counterpart of [`ensure_well_formed`]
pub(crate) fn check_decoded(
    draft: TemplateDraft,
    format: ExportFormat,
) -> Result<TemplateDraft, ImportError> {
    match draft.attributes.iter().position(|a| !a.is_complete()) {
        Some(index) => Err(ImportError::invalid(
            format,
            format!("attribute #{} has an empty name or type", index + 1),
        )),
        None => Ok(draft),
    }
}

/// Encode `draft` as pretty-printed JSON
///
/// # Errors
/// `SerializeError::MalformedRecord` for incomplete attributes.
pub fn to_json(draft: &TemplateDraft) -> Result<String, SerializeError> {
    JsonCodec.encode(draft)
}

/// Decode a JSON template
///
/// # Errors
/// `ImportError` if the text is not a complete template.
pub fn from_json(text: &str) -> Result<TemplateDraft, ImportError> {
    JsonCodec.decode(text)
}

/// Encode the attribute table as CSV
///
/// # Errors
/// `SerializeError::MalformedRecord` for incomplete attributes.
pub fn to_csv(draft: &TemplateDraft) -> Result<String, SerializeError> {
    CsvCodec.encode(draft)
}

/// Decode a CSV attribute table into an unnamed draft
///
/// # Errors
/// `ImportError` on a bad header, a malformed row or an incomplete attribute.
pub fn from_csv(text: &str) -> Result<TemplateDraft, ImportError> {
    CsvCodec.decode(text)
}

/// Encode `draft` as an XML document
///
/// # Errors
/// `SerializeError::MalformedRecord` for incomplete attributes and
/// `SerializeError::InvalidXmlChar` for text XML cannot carry.
pub fn to_xml(draft: &TemplateDraft) -> Result<String, SerializeError> {
    XmlCodec.encode(draft)
}

/// Decode an XML template document
///
/// # Errors
/// `ImportError` if the document is not well-formed or not a template.
pub fn from_xml(text: &str) -> Result<TemplateDraft, ImportError> {
    XmlCodec.decode(text)
}
