//! STK Exchange
//!
//! Serializes templates to JSON, CSV and XML, and imports them back.
//!
//! # Overview
//!
//! - **ExportFormat**: the three supported encodings
//! - **TemplateCodec / CodecRegistry**: per-format encode and decode
//! - **ExchangeLayer**: async file import and export with size limits and checksums
//!
//! # Example
//!
//! ```rust
//! use stk_exchange::{from_xml, to_csv, to_xml};
//! use stk_model::{Attribute, TemplateDraft};
//!
//! let draft = TemplateDraft::new("PumpA").with_attribute(Attribute::new("Flow", "AI_REAL"));
//!
//! assert_eq!(to_csv(&draft).unwrap().lines().count(), 2);
//! assert_eq!(from_xml(&to_xml(&draft).unwrap()).unwrap(), draft);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod codecs;
pub mod error;
pub mod format;
pub mod layer;

// Re-exports
pub use codecs::{
    default_codecs, ensure_well_formed, from_csv, from_json, from_xml, to_csv, to_json, to_xml,
    CodecRegistry, CsvCodec, JsonCodec, TemplateCodec, XmlCodec, CSV_HEADER,
};
pub use error::{ExchangeError, ExchangeResult, ImportError, SerializeError};
pub use format::{ExportFormat, UnknownFormat};
pub use layer::{ExchangeLayer, ExportReceipt, ImportResult, SourceMetadata, DEFAULT_MAX_FILE_SIZE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
