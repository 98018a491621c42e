//! Workbench - template authoring service
//!
//! Ties the catalog, validator, exchange layer, store and notifier together.
//! Constructed explicitly and passed by reference; nothing here is global.

use crate::config::WorkbenchConfig;
use crate::error::WorkbenchResult;
use crate::notify::{Notifier, Severity, TracingNotifier};
use crate::store::TemplateStore;
use std::path::Path;
use std::sync::Arc;
use stk_catalog::{find_prebuilt, Catalog, CatalogEntry, CatalogFilter};
use stk_exchange::{
    ExchangeLayer, ExportFormat, ExportReceipt, ImportError, ImportResult, SerializeError,
};
use stk_model::{TemplateDraft, TemplateId, TemplateRecord};
use stk_validation::{AutoFixOutcome, TemplateValidator, ValidationReport};

/// Template authoring service
pub struct Workbench {
    catalog: Catalog,
    validator: TemplateValidator,
    exchange: ExchangeLayer,
    store: Arc<TemplateStore>,
    notifier: Arc<dyn Notifier>,
    default_format: ExportFormat,
}

impl std::fmt::Debug for Workbench {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbench")
            .field("catalog_entries", &self.catalog.len())
            .field("store", &self.store)
            .field("exchange", &self.exchange)
            .finish_non_exhaustive()
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(&WorkbenchConfig::default())
    }
}

impl Workbench {
    /// Create workbench with the standard catalog, an in-memory store and
    /// a tracing notifier
    #[must_use]
    pub fn new(config: &WorkbenchConfig) -> Self {
        let catalog = Catalog::standard();
        Self {
            validator: TemplateValidator::new(config.validator.clone())
                .with_catalog(catalog.clone()),
            catalog,
            exchange: ExchangeLayer::new().with_max_file_size(config.exchange.max_file_size),
            store: Arc::new(TemplateStore::new()),
            notifier: Arc::new(TracingNotifier),
            default_format: config.exchange.default_format,
        }
    }

    /// Use a shared store
    #[must_use]
    pub fn with_store(mut self, store: Arc<TemplateStore>) -> Self {
        self.store = store;
        self
    }

    /// Use a specific notifier
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Use a specific catalog for listing and type checks
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.validator = self.validator.with_catalog(catalog.clone());
        self.catalog = catalog;
        self
    }

    /// Use a specific exchange layer
    #[must_use]
    pub fn with_exchange(mut self, exchange: ExchangeLayer) -> Self {
        self.exchange = exchange;
        self
    }

    /// Data-type catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Configured validator
    #[inline]
    #[must_use]
    pub fn validator(&self) -> &TemplateValidator {
        &self.validator
    }

    /// Shared template store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<TemplateStore> {
        &self.store
    }

    /// File and text exchange layer
    #[inline]
    #[must_use]
    pub fn exchange(&self) -> &ExchangeLayer {
        &self.exchange
    }

    /// Format used when none is given
    #[inline]
    #[must_use]
    pub fn default_format(&self) -> ExportFormat {
        self.default_format
    }

    /// Catalog entries matching `filter`
    #[must_use]
    pub fn browse(&self, filter: &CatalogFilter) -> Vec<&CatalogEntry> {
        self.catalog.list(filter)
    }

    /// Editable copy of a pre-built template
    ///
    /// # Errors
    /// `WorkbenchError::Catalog` for an unknown key
    pub fn prebuilt(&self, key: &str) -> WorkbenchResult<TemplateDraft> {
        Ok(find_prebuilt(key)?.to_draft())
    }

    /// Validate a draft and report the outcome
    pub fn validate(&self, draft: &TemplateDraft) -> ValidationReport {
        let report = self.validator.validate(draft);
        let (message, severity) = if report.is_blocked() {
            (
                format!(
                    "Validation failed with {} error(s), score {}",
                    report.error_count(),
                    report.score
                ),
                Severity::Error,
            )
        } else if report.is_clean() {
            (format!("Validation passed, score {}", report.score), Severity::Success)
        } else {
            (
                format!(
                    "Validation found {} error(s) and {} warning(s), score {}",
                    report.error_count(),
                    report.warning_count(),
                    report.score
                ),
                Severity::Warning,
            )
        };
        self.notifier.notify(&message, severity);
        report
    }

    /// Apply every available fix to `draft`
    pub fn auto_fix(&self, draft: &mut TemplateDraft) -> AutoFixOutcome {
        let outcome = self.validator.auto_fix(draft);
        let message = match outcome.applied.len() {
            0 => "No automatic fixes available".to_string(),
            n => format!("Applied {n} automatic fix(es), score {}", outcome.report.score),
        };
        self.notifier.notify(&message, Severity::Info);
        outcome
    }

    /// Save a draft as a new record
    ///
    /// # Errors
    /// `WorkbenchError::Storage` if the draft is rejected or the backend fails;
    /// the store is unchanged in that case.
    pub fn save(&self, draft: TemplateDraft) -> WorkbenchResult<TemplateId> {
        let name = draft.name.clone();
        match self.store.save(draft) {
            Ok(id) => {
                self.notifier
                    .notify(&format!("Template '{name}' saved"), Severity::Success);
                Ok(id)
            }
            Err(err) => {
                self.notifier
                    .notify(&format!("Save failed: {err}"), Severity::Error);
                Err(err.into())
            }
        }
    }

    /// Replace a saved record
    ///
    /// # Errors
    /// `WorkbenchError::Storage` on rejection, unknown id or backend failure
    pub fn replace(&self, id: TemplateId, draft: TemplateDraft) -> WorkbenchResult<()> {
        Ok(self.store.replace(id, draft)?)
    }

    /// Remove a saved record, returning whether it existed
    ///
    /// # Errors
    /// `WorkbenchError::Storage` on backend failure
    pub fn remove(&self, id: TemplateId) -> WorkbenchResult<bool> {
        Ok(self.store.remove(id)?)
    }

    /// Saved records matching `text`, newest first
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<TemplateRecord> {
        self.store.find(text)
    }

    /// Encode a draft in `format`
    ///
    /// # Errors
    /// `WorkbenchError::Serialize` for drafts the format cannot carry
    pub fn export(&self, draft: &TemplateDraft, format: ExportFormat) -> WorkbenchResult<String> {
        let result = self.exchange.encode(draft, format);
        self.report_export(&draft.name, format, result.as_ref().err());
        Ok(result?)
    }

    /// Write a draft to `path`, format taken from the extension
    ///
    /// # Errors
    /// `WorkbenchError::Serialize` on an unknown extension, an unencodable
    /// draft or a write failure
    pub async fn export_file(
        &self,
        draft: &TemplateDraft,
        path: impl AsRef<Path>,
    ) -> WorkbenchResult<ExportReceipt> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path).unwrap_or(self.default_format);
        let result = self.exchange.export_file(draft, path).await;
        self.report_export(&draft.name, format, result.as_ref().err());
        Ok(result?)
    }

    /// Decode text in `format`
    ///
    /// # Errors
    /// `WorkbenchError::Import` if the text is not a complete template
    pub fn import(&self, text: &str, format: ExportFormat) -> WorkbenchResult<TemplateDraft> {
        let result = self.exchange.decode(text, format);
        self.report_import(format.extension(), result.as_ref().map(|d| d.name.as_str()));
        Ok(result?)
    }

    /// Read a template file, format taken from the extension
    ///
    /// # Errors
    /// `WorkbenchError::Import`; nothing is imported on failure
    pub async fn import_file(&self, path: impl AsRef<Path>) -> WorkbenchResult<ImportResult> {
        let path = path.as_ref();
        let result = self.exchange.import_file(path).await;
        self.report_import(
            &path.display().to_string(),
            result.as_ref().map(|r| r.draft.name.as_str()),
        );
        Ok(result?)
    }

    fn report_export(
        &self,
        name: &str,
        format: ExportFormat,
        error: Option<&SerializeError>,
    ) {
        match error {
            None => self.notifier.notify(
                &format!("Exported '{name}' as {}", format.extension().to_uppercase()),
                Severity::Success,
            ),
            Some(err) => self
                .notifier
                .notify(&format!("Export failed: {err}"), Severity::Error),
        }
    }

    fn report_import(
        &self,
        source: &str,
        result: Result<&str, &ImportError>,
    ) {
        match result {
            Ok(name) => self.notifier.notify(
                &format!("Imported '{name}' from {source}"),
                Severity::Success,
            ),
            Err(err) => self
                .notifier
                .notify(&format!("Import failed: {err}"), Severity::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkbenchError;
    use crate::notify::RecordingNotifier;
    use stk_model::Attribute;

    fn workbench() -> (Workbench, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let bench = Workbench::default().with_notifier(notifier.clone());
        (bench, notifier)
    }

    #[test]
    fn save_notifies_success_and_failure() {
        let (bench, notifier) = workbench();
        bench
            .save(TemplateDraft::new("PumpA").with_attribute(Attribute::new("Flow", "AI_REAL")))
            .unwrap();
        assert_eq!(notifier.last().unwrap().severity, Severity::Success);

        let err = bench.save(TemplateDraft::new("")).unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);
        assert_eq!(bench.store().len(), 1);
    }

    #[test]
    fn validate_notifies_by_outcome() {
        let (bench, notifier) = workbench();
        bench.validate(&TemplateDraft::new(""));
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);

        bench.validate(
            &TemplateDraft::new("PumpA").with_attribute(Attribute::new("Flow", "AI_REAL")),
        );
        assert_eq!(notifier.last().unwrap().severity, Severity::Warning);
    }

    #[test]
    fn export_and_import_notify() {
        let (bench, notifier) = workbench();
        let draft = bench.prebuilt("pump").unwrap();

        let csv = bench.export(&draft, ExportFormat::Csv).unwrap();
        assert_eq!(notifier.last().unwrap().message, "Exported 'CentrifugalPump' as CSV");

        let back = bench.import(&csv, ExportFormat::Csv).unwrap();
        assert_eq!(back.attributes, draft.attributes);

        assert!(bench.import("Name,Type\n", ExportFormat::Csv).is_err());
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn unknown_prebuilt_is_catalog_error() {
        let (bench, _) = workbench();
        assert!(matches!(bench.prebuilt("boiler"), Err(WorkbenchError::Catalog(_))));
    }
}
