//! Error types for the workbench
//!
//! Provides error handling for:
//! - Store and key/value backend failures
//! - Form row editing
//! - Wizard navigation
//! - Workbench operations (wrapping the lower crates' errors)

use crate::wizard::WizardStep;
use stk_catalog::CatalogError;
use stk_exchange::{ImportError, SerializeError};
use stk_model::{FingerprintError, TemplateId};
use stk_validation::ValidationError;

/// Template store errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Draft failed the blocking checks; the store is unchanged
    #[error("{0}")]
    Rejected(#[from] ValidationError),

    /// No record with this id
    #[error("template not found: {0}")]
    NotFound(TemplateId),

    /// Key/value backend failure
    #[error("storage backend failed on '{key}': {message}")]
    Backend {
        /// Storage key being accessed
        key: String,
        /// Backend's description of the failure
        message: String,
    },

    /// Persisted data could not be decoded
    #[error("stored data under '{key}' is corrupt: {source}")]
    Corrupt {
        /// Storage key holding the bad data
        key: String,
        /// Decoder failure
        #[source]
        source: serde_json::Error,
    },

    /// Record could not be encoded
    #[error("record encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Fingerprint computation failed
    #[error("fingerprint failed: {0}")]
    Fingerprint(#[from] FingerprintError),
}

impl StorageError {
    /// Create backend error
    pub fn backend(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Form row editing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Row index out of range
    #[error("no attribute row {index} (form has {len})")]
    NoSuchRow {
        /// Requested row
        index: usize,
        /// Rows in the form
        len: usize,
    },
}

/// Wizard navigation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Already at the first or last step
    #[error("no step {direction} {from}")]
    NoTransition {
        /// Current step
        from: WizardStep,
        /// `before` or `after`
        direction: &'static str,
    },

    /// Transition not in the allowed table
    #[error("illegal wizard transition: {from} -> {to}")]
    IllegalTransition {
        /// Current step
        from: WizardStep,
        /// Requested step
        to: WizardStep,
    },

    /// Current step's requirements are not met
    #[error("cannot leave {step}: {reason}")]
    Incomplete {
        /// Step that cannot be left
        step: WizardStep,
        /// First unmet requirement
        reason: String,
    },
}

/// Main workbench error type
#[derive(Debug, thiserror::Error)]
pub enum WorkbenchError {
    /// Store failure
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Export failure
    #[error("export failed: {0}")]
    Serialize(#[from] SerializeError),

    /// Import failure
    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    /// Catalog lookup failure
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl WorkbenchError {
    /// Whether the error is a blocking validation failure
    #[inline]
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Storage(StorageError::Rejected(_)))
    }
}

/// Result type alias for workbench operations
pub type WorkbenchResult<T> = Result<T, WorkbenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_detected_through_storage() {
        let err: WorkbenchError = StorageError::from(ValidationError::MissingName).into();
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "storage error: template name is required");
    }

    #[test]
    fn other_failures_are_not_rejections() {
        let missing: WorkbenchError = StorageError::NotFound(TemplateId::new()).into();
        assert!(!missing.is_rejection());

        let catalog: WorkbenchError = CatalogError::UnknownTemplate("boiler".into()).into();
        assert!(!catalog.is_rejection());
    }

    #[test]
    fn wizard_error_display() {
        let err = WizardError::NoTransition {
            from: WizardStep::Export,
            direction: "after",
        };
        assert_eq!(err.to_string(), "no step after export");
    }
}
