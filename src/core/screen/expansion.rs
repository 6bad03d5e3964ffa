//! Expanded-card id set
//!
//! Tracks which cards are shown in their detailed rendering. Toggling
//! returns a new set rather than mutating in place; callers replace
//! their copy on each toggle.

use std::collections::BTreeSet;

/// The set of card ids currently expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedIds(BTreeSet<String>);

impl ExpandedIds {
    /// Create an empty set (all cards collapsed)
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Create a set from an iterator of card ids
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    /// Whether the given card is expanded
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Return a new set with the given card's membership flipped
    #[must_use]
    pub fn toggle(&self, id: &str) -> Self {
        let mut ids = self.0.clone();
        if !ids.remove(id) {
            ids.insert(id.to_string());
        }
        Self(ids)
    }

    /// Number of expanded cards
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no cards are expanded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
