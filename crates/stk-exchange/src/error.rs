//! Error types for template exchange
//!
//! Provides error handling for:
//! - Serialize operations (draft → text/file)
//! - Import operations (text/file → draft)

use crate::format::ExportFormat;
use std::path::PathBuf;

/// Errors during serialization (egress)
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// Record shape cannot be encoded faithfully
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Character that XML 1.0 cannot carry
    #[error("{field} contains U+{code:04X}, which XML cannot represent")]
    InvalidXmlChar {
        /// Offending field, e.g. `attribute[2].name`
        field: String,
        /// Code point of the character
        code: u32,
    },

    /// JSON encoder failure
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// No codec registered for format
    #[error("no codec registered for format: {0}")]
    NoCodec(ExportFormat),

    /// Output path has no recognised extension
    #[error("cannot infer export format from path: {0}")]
    UnsupportedPath(PathBuf),

    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        /// File being written
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

impl SerializeError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors during import (ingress)
///
/// Import is all-or-nothing: any of these means nothing was imported.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// No codec handles the file extension
    #[error("no codec registered for extension: '{0}'")]
    NoCodecForExtension(String),

    /// Input is not well-formed in its format
    #[error("syntax error in {format} input: {message}")]
    Syntax {
        /// Format the input was read as
        format: ExportFormat,
        /// Parser message
        message: String,
    },

    /// Input is well-formed but not a valid template
    #[error("invalid {format} template: {message}")]
    InvalidRecord {
        /// Format the input was read as
        format: ExportFormat,
        /// What is missing or wrong
        message: String,
    },

    /// File exceeds the configured limit
    #[error("file too large: {size} bytes (max: {max})")]
    TooLarge {
        /// File size in bytes
        size: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    /// Create syntax error
    pub fn syntax(format: ExportFormat, message: impl Into<String>) -> Self {
        Self::Syntax {
            format,
            message: message.into(),
        }
    }

    /// Create invalid-record error
    pub fn invalid(format: ExportFormat, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            format,
            message: message.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Error from an operation that both reads and writes, such as a file conversion
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// Writing the target failed
    #[error("serialize error: {0}")]
    Serialize(#[from] SerializeError),

    /// Reading the source failed
    #[error("import error: {0}")]
    Import(#[from] ImportError),
}

/// Result type alias for read-and-write exchange operations
pub type ExchangeResult<T> = Result<T, ExchangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_error_display() {
        let err = ImportError::syntax(ExportFormat::Csv, "unterminated quoted field on line 3");
        assert_eq!(
            err.to_string(),
            "syntax error in csv input: unterminated quoted field on line 3"
        );
    }

    #[test]
    fn xml_char_error_display() {
        let err = SerializeError::InvalidXmlChar {
            field: "attribute 'Flow' description".into(),
            code: 0x1B,
        };
        assert_eq!(
            err.to_string(),
            "attribute 'Flow' description contains U+001B, which XML cannot represent"
        );
    }

    #[test]
    fn error_conversions() {
        let err: ExchangeError = ImportError::NoCodecForExtension("txt".into()).into();
        assert!(matches!(err, ExchangeError::Import(_)));
    }
}
