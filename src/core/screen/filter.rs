//! Client-side search and category filtering
//!
//! Filtering is a linear scan over the in-memory collection:
//! case-insensitive substring matching across a record's search fields,
//! AND'd with an equality check on its category unless the selected
//! category is `"all"`.

use crate::core::models::{Program, Resource};

/// Category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Records that can be searched and category-filtered
pub trait Filterable {
    /// The 2-4 string fields the free-text query matches against
    fn search_fields(&self) -> Vec<&str>;

    /// The category string compared against the selected category
    fn category(&self) -> &str;
}

impl Filterable for Resource {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.category, &self.summary]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Filterable for Program {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.degree_type, &self.description]
    }

    fn category(&self) -> &str {
        &self.degree_type
    }
}

/// Ephemeral per-screen filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query; empty matches everything
    pub query: String,
    /// Selected category; [`ALL_CATEGORIES`] matches everything
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterState {
    /// Create filter state from optional CLI inputs
    #[must_use]
    pub fn new(query: Option<String>, category: Option<String>) -> Self {
        Self {
            query: query.unwrap_or_default(),
            category: category.unwrap_or_else(|| ALL_CATEGORIES.to_string()),
        }
    }

    /// Whether this filter passes every record through unchanged
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
    }

    /// Whether a single record passes the filter
    #[must_use]
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if !self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
            && !item.category().eq_ignore_ascii_case(&self.category)
        {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }

        let needle = self.query.to_lowercase();
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filter a collection, preserving source order.
    ///
    /// The result is always a subset of `items`, and is exactly `items`
    /// when the filter is the identity.
    #[must_use]
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}
