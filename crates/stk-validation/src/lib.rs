//! STK Validation
//!
//! Checks template drafts and reports findings with a derived score.
//!
//! # Overview
//!
//! - **TemplateValidator**: naming, best-practice, security and performance checks
//! - **ValidationReport**: findings plus a `[0, 100]` score
//! - **AutoFix**: mechanical corrections (PascalCase rename, placeholder descriptions)
//! - **require_savable**: the blocking subset enforced before a save
//!
//! # Example
//!
//! ```rust
//! use stk_model::{Attribute, TemplateDraft};
//! use stk_validation::TemplateValidator;
//!
//! let validator = TemplateValidator::default();
//! let mut draft = TemplateDraft::new("feed pump")
//!     .with_attribute(Attribute::new("Flow", "AI_REAL"));
//!
//! let outcome = validator.auto_fix(&mut draft);
//! assert_eq!(draft.name, "FeedPump");
//! assert!(outcome.report.score.value() < 100);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod finding;
pub mod naming;
pub mod report;
pub mod validator;

// Re-exports
pub use config::ValidatorConfig;
pub use error::{require_savable, ConfigError, ValidationError};
pub use finding::{AutoFix, Finding, FindingCategory, FindingStatus};
pub use report::{ValidationReport, ValidationScore};
pub use validator::{AutoFixOutcome, TemplateValidator};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validation
    pub use crate::{
        AutoFix, Finding, FindingCategory, FindingStatus, TemplateValidator, ValidationReport,
        ValidationScore, ValidatorConfig,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
