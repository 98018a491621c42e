//! Catalog index and queries
//!
//! Provides [`Catalog`], a read-only index over the built-in data types
//! with category and free-text filtering.

use crate::data_types::DATA_TYPES;
use crate::entry::{CatalogEntry, TypeCategory};
use std::collections::HashMap;

/// Query filter for [`Catalog::list`]
///
/// Both fields are optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Exact category match
    pub category: Option<TypeCategory>,

    /// Case-insensitive substring over name, description and human category
    pub search_text: Option<String>,
}

impl CatalogFilter {
    /// Empty filter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: TypeCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// With search text
    #[inline]
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Lowercased, trimmed search needle; `None` when blank
    fn needle(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Immutable data type catalog
///
/// Entries are never added or removed after construction. Lookup by name
/// goes through an uppercase index.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Catalog over the built-in data types
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries(&DATA_TYPES)
    }

    /// Catalog over an arbitrary static table
    #[must_use]
    pub fn from_entries(entries: &'static [CatalogEntry]) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.to_ascii_uppercase(), i))
            .collect();
        Self { entries, by_name }
    }

    /// List entries matching `filter`, in declaration order
    ///
    /// Never fails; an unmatched filter yields an empty list.
    #[must_use]
    pub fn list(&self, filter: &CatalogFilter) -> Vec<&CatalogEntry> {
        let needle = filter.needle();
        let result: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|e| filter.category.map_or(true, |c| e.type_category == c))
            .filter(|e| needle.as_deref().map_or(true, |n| e.matches_lowercase(n)))
            .collect();

        tracing::debug!(
            category = ?filter.category,
            search = ?filter.search_text,
            matches = result.len(),
            "catalog query"
        );
        result
    }

    /// Lookup entry by type name (case-insensitive)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name
            .get(&name.trim().to_ascii_uppercase())
            .map(|&i| &self.entries[i])
    }

    /// Check whether a type name is known
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All entries in declaration order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        self.entries
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry count per category, in [`TypeCategory::ALL`] order
    #[must_use]
    pub fn count_by_category(&self) -> Vec<(TypeCategory, usize)> {
        TypeCategory::ALL
            .iter()
            .map(|&c| (c, self.entries.iter().filter(|e| e.type_category == c).count()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
