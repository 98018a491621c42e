//! STK Catalog
//!
//! Immutable reference data for template authoring.
//!
//! # Overview
//!
//! The catalog provides:
//! - **Catalog**: the 31 built-in data types with category/text queries
//! - **Security levels**: the seven write classifications
//! - **Pre-built templates**: starting points for common equipment
//!
//! # Example
//!
//! ```rust
//! use stk_catalog::{Catalog, CatalogFilter, TypeCategory};
//!
//! let catalog = Catalog::standard();
//! let digital = catalog.list(&CatalogFilter::new().with_category(TypeCategory::Digital));
//! assert!(digital.iter().all(|e| e.type_category == TypeCategory::Digital));
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod data_types;
pub mod entry;
pub mod prebuilt;
pub mod security;

// Re-exports
pub use catalog::{Catalog, CatalogFilter};
pub use data_types::{DATA_TYPES, DATA_TYPE_COUNT, SECURITY_CLASS_TYPE};
pub use entry::{CatalogEntry, CatalogError, TypeCategory};
pub use prebuilt::{find_prebuilt, prebuilt_templates, PrebuiltTemplate};
pub use security::{security_levels, SecurityClassification, SecurityLevel};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog queries
    pub use crate::{Catalog, CatalogEntry, CatalogFilter, PrebuiltTemplate, TypeCategory};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
