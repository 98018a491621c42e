//! STK Model
//!
//! Typed template content shared by every other STK crate.
//!
//! # Core Concepts
//!
//! - [`Attribute`]: one named, typed field of a template
//! - [`TemplateDraft`]: structural template content (the collected record)
//! - [`TemplateRecord`]: a saved draft with id, timestamp, size and fingerprint
//! - [`Fingerprint`]: 32-byte Blake3 digest of template content
//!
//! # Example
//!
//! ```rust
//! use stk_model::{Attribute, TemplateDraft};
//!
//! let draft = TemplateDraft::new("PumpA")
//!     .with_category("analog")
//!     .with_attribute(Attribute::new("Flow", "AI_REAL"));
//!
//! assert_eq!(draft.attributes.len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod attribute;
mod fingerprint;
mod template;

pub use attribute::Attribute;
pub use fingerprint::{Fingerprint, FingerprintError};
pub use template::{TemplateDraft, TemplateId, TemplateRecord};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
