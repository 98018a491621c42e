//! Exchange Layer - file boundary for templates
//!
//! Provides the trusted boundary for:
//! - File → TemplateDraft decoding (import)
//! - TemplateDraft → File encoding (export)

use crate::codecs::{default_codecs, CodecRegistry};
use crate::error::{ExchangeResult, ImportError, SerializeError};
use crate::format::ExportFormat;
use std::path::{Path, PathBuf};
use stk_model::{Fingerprint, TemplateDraft};

/// Default import size limit (1 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Result of importing a file
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// The decoded draft
    pub draft: TemplateDraft,
    /// Source file metadata
    pub source: SourceMetadata,
}

/// Source file metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMetadata {
    /// File path
    pub path: PathBuf,
    /// Format the file was decoded as
    pub format: ExportFormat,
    /// Content checksum
    pub checksum: Fingerprint,
    /// Size in bytes
    pub bytes: u64,
}

/// Result of writing a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// File path
    pub path: PathBuf,
    /// Format written
    pub format: ExportFormat,
    /// Checksum of the written content
    pub checksum: Fingerprint,
    /// Size in bytes
    pub bytes: u64,
}

/// Exchange Layer
///
/// The only component that reads or writes template files. Imports are
/// all-or-nothing: a file either decodes to a complete draft or nothing
/// is returned.
#[derive(Debug, Clone)]
pub struct ExchangeLayer {
    /// Registered codecs
    codecs: CodecRegistry,
    /// Maximum file size to import (bytes)
    max_file_size: u64,
}

impl ExchangeLayer {
    /// Create layer with default codecs
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_codecs(default_codecs())
    }

    /// Create layer with a custom codec registry
    #[inline]
    #[must_use]
    pub fn with_codecs(codecs: CodecRegistry) -> Self {
        Self {
            codecs,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Set the import size limit
    #[inline]
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Import size limit in bytes
    #[inline]
    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Registered codecs
    #[inline]
    #[must_use]
    pub fn codecs(&self) -> &CodecRegistry {
        &self.codecs
    }

    /// Encode a draft in memory
    ///
    /// # Errors
    /// See [`CodecRegistry::encode`].
    pub fn encode(
        &self,
        draft: &TemplateDraft,
        format: ExportFormat,
    ) -> Result<String, SerializeError> {
        self.codecs.encode(draft, format)
    }

    /// Decode text in memory
    ///
    /// # Errors
    /// See [`CodecRegistry::decode`].
    pub fn decode(&self, text: &str, format: ExportFormat) -> Result<TemplateDraft, ImportError> {
        self.codecs.decode(text, format)
    }

    /// Import a template file (ingress)
    ///
    /// The codec is picked from the file extension. When the decoded draft
    /// has no name (always the case for CSV) the file stem is used.
    ///
    /// # Errors
    /// - `ImportError::NoCodecForExtension` if no codec is registered
    /// - `ImportError::TooLarge` if the file exceeds the limit
    /// - `ImportError::Syntax` / `ImportError::InvalidRecord` from the codec
    /// - `ImportError::Io` if the file cannot be read
    pub async fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportResult, ImportError> {
        let path = path.as_ref();

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let codec = self
            .codecs
            .find_for_path(path)
            .ok_or_else(|| ImportError::NoCodecForExtension(extension.to_string()))?;

        let size = tokio::fs::metadata(path)
            .await
            .map_err(|e| ImportError::io_error(path, e))?
            .len();
        if size > self.max_file_size {
            return Err(ImportError::TooLarge {
                size,
                max: self.max_file_size,
            });
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ImportError::io_error(path, e))?;
        let checksum = Fingerprint::compute(content.as_bytes());

        let mut draft = codec.decode(&content)?;
        if draft.name.trim().is_empty() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                draft.name = stem.to_string();
            }
        }

        tracing::info!(
            path = %path.display(),
            format = %codec.format(),
            attributes = draft.attributes.len(),
            checksum = %checksum.short(),
            "imported template"
        );

        Ok(ImportResult {
            draft,
            source: SourceMetadata {
                path: path.to_path_buf(),
                format: codec.format(),
                checksum,
                bytes: content.len() as u64,
            },
        })
    }

    /// Export a draft to a file (egress)
    ///
    /// The format is inferred from the path's extension.
    ///
    /// # Errors
    /// - `SerializeError::UnsupportedPath` if the extension is not a known format
    /// - encoding errors from the codec
    /// - `SerializeError::Io` if the file cannot be written
    pub async fn export_file(
        &self,
        draft: &TemplateDraft,
        path: impl AsRef<Path>,
    ) -> Result<ExportReceipt, SerializeError> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path)
            .ok_or_else(|| SerializeError::UnsupportedPath(path.to_path_buf()))?;
        self.export_file_as(draft, path, format).await
    }

    /// Export a draft to a file in an explicit format
    ///
    /// # Errors
    /// Encoding errors from the codec, or `SerializeError::Io`.
    pub async fn export_file_as(
        &self,
        draft: &TemplateDraft,
        path: impl AsRef<Path>,
        format: ExportFormat,
    ) -> Result<ExportReceipt, SerializeError> {
        let path = path.as_ref();
        let text = self.encode(draft, format)?;

        tokio::fs::write(path, text.as_bytes())
            .await
            .map_err(|e| SerializeError::io_error(path, e))?;

        let checksum = Fingerprint::compute(text.as_bytes());
        tracing::info!(
            path = %path.display(),
            %format,
            bytes = text.len(),
            "exported template"
        );

        Ok(ExportReceipt {
            path: path.to_path_buf(),
            format,
            checksum,
            bytes: text.len() as u64,
        })
    }

    /// Import `source` and write it to `target` in `format`
    ///
    /// Nothing is written when the import fails.
    ///
    /// # Errors
    /// `ExchangeError::Import` for the read side, `ExchangeError::Serialize`
    /// for the write side
    pub async fn convert_file(
        &self,
        source: impl AsRef<Path>,
        target: impl AsRef<Path>,
        format: ExportFormat,
    ) -> ExchangeResult<ExportReceipt> {
        let imported = self.import_file(source).await?;
        Ok(self.export_file_as(&imported.draft, target, format).await?)
    }
}

impl Default for ExchangeLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_creation() {
        let layer = ExchangeLayer::new();
        assert_eq!(layer.max_file_size(), DEFAULT_MAX_FILE_SIZE);
        assert_eq!(layer.codecs().formats().len(), 3);
    }

    #[test]
    fn layer_with_max_file_size() {
        let layer = ExchangeLayer::default().with_max_file_size(10);
        assert_eq!(layer.max_file_size(), 10);
    }

    #[tokio::test]
    async fn unknown_extension_is_rejected_before_reading() {
        let layer = ExchangeLayer::new();
        let err = layer.import_file("/nonexistent/PumpA.yaml").await.unwrap_err();
        assert!(matches!(err, ImportError::NoCodecForExtension(ext) if ext == "yaml"));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let layer = ExchangeLayer::new();
        let err = layer.import_file("/nonexistent/PumpA.json").await.unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }
}
