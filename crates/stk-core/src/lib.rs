//! STK Core
//!
//! Template authoring: form collection, the creation wizard, the template
//! store and the [`Workbench`] service that ties them to validation and
//! exchange.
//!
//! # Overview
//!
//! - **TemplateForm**: raw field values collected into a draft
//! - **Wizard**: BasicInfo → Attributes → Review → Export
//! - **TemplateStore**: thread-safe saved records with optional write-through
//! - **Notifier**: user-facing outcome messages
//! - **Workbench**: validate, fix, save, search, export and import
//!
//! # Example
//!
//! ```rust
//! use stk_core::{AttributeRow, TemplateForm, Workbench};
//!
//! let bench = Workbench::default();
//!
//! let mut form = TemplateForm::new();
//! form.name = "PumpA".into();
//! form.push_row(AttributeRow::new("Flow", "AI_REAL", ""));
//!
//! let draft = form.collect();
//! let report = bench.validate(&draft);
//! assert!(!report.is_blocked());
//!
//! bench.save(draft).unwrap();
//! assert_eq!(bench.search("pumpa").len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod storage;
pub mod store;
pub mod wizard;
pub mod workbench;

// Re-exports
pub use config::{ExchangeConfig, WorkbenchConfig};
pub use error::{FormError, StorageError, WizardError, WorkbenchError, WorkbenchResult};
pub use form::{AttributeRow, TemplateForm};
pub use notify::{Notification, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use storage::{KeyValueStore, MemoryKeyValueStore};
pub use store::{TemplateStore, STORE_KEY};
pub use wizard::{allowed_transitions, validate_transition, Wizard, WizardStep};
pub use workbench::Workbench;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for workbench users
    pub use crate::{
        AttributeRow, Notifier, Severity, TemplateForm, TemplateStore, Wizard, WizardStep,
        Workbench, WorkbenchConfig,
    };
    pub use stk_model::{Attribute, TemplateDraft, TemplateId, TemplateRecord};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
