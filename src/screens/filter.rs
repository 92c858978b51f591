//! Searchable, filterable record collections.
//!
//! [`FilterableList`] owns a screen's source records in an arena keyed by
//! [`ItemId`]. The visible subset is always recomputed from three inputs: the
//! source records, the search text and the active filter values. Every mutation
//! publishes a fresh [`VisibleSnapshot`] for the renderer.
//!
//! Removal is by id, never by value, so two records with identical fields can
//! be told apart.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Filter value that disables a filter.
pub const FILTER_ALL: &str = "all";

/// Stable identity of a record inside one [`FilterableList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A record that can be searched and filtered.
pub trait Searchable {
    /// Fields consulted by the search text.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether this record passes filter `name` set to `value`.
    ///
    /// Never called with [`FILTER_ALL`].
    fn matches_filter(&self, name: &str, value: &str) -> bool;
}

/// Case-insensitive substring match over the record's search fields.
///
/// Empty search text matches everything.
pub fn matches_search<T: Searchable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Immutable view of the visible records at one revision.
#[derive(Debug)]
pub struct VisibleSnapshot<T> {
    revision: u64,
    rows: Arc<[(ItemId, T)]>,
}

impl<T> Clone for VisibleSnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            revision: self.revision,
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> VisibleSnapshot<T> {
    /// Monotonic counter, bumped on every publish.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(ItemId, &T)> {
        self.rows.get(index).map(|(id, item)| (*id, item))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &T)> {
        self.rows.iter().map(|(id, item)| (*id, item))
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.rows.iter().map(|(id, _)| *id).collect()
    }
}

/// Source collection plus search/filter inputs.
#[derive(Debug, Clone)]
pub struct FilterableList<T> {
    entries: Vec<(ItemId, T)>,
    next_id: u64,
    filter_names: &'static [&'static str],
    search: String,
    filters: BTreeMap<&'static str, String>,
    snapshot: VisibleSnapshot<T>,
}

impl<T: Searchable + Clone> FilterableList<T> {
    /// Create an empty list accepting the given filter names.
    pub fn new(filter_names: &'static [&'static str]) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            filter_names,
            search: String::new(),
            filters: BTreeMap::new(),
            snapshot: VisibleSnapshot {
                revision: 0,
                rows: Arc::from(Vec::new()),
            },
        }
    }

    /// Create a list seeded with `items` in order.
    pub fn with_items(
        filter_names: &'static [&'static str],
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let mut list = Self::new(filter_names);
        for item in items {
            list.push(item);
        }
        list.publish();
        list
    }

    fn push(&mut self, item: T) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, item));
        id
    }

    /// Append a record and return its id.
    pub fn insert(&mut self, item: T) -> ItemId {
        let id = self.push(item);
        self.publish();
        id
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> VisibleSnapshot<T> {
        self.search = text.into();
        self.publish()
    }

    /// Set filter `name` to `value`.
    ///
    /// `value` of [`FILTER_ALL`] (any case) or empty clears the filter. Names
    /// this list does not know are ignored.
    pub fn set_filter(&mut self, name: &str, value: &str) -> VisibleSnapshot<T> {
        let Some(name) = self.filter_names.iter().copied().find(|n| *n == name) else {
            tracing::debug!("Ignoring unknown filter {}={}", name, value);
            return self.snapshot.clone();
        };

        if value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL) {
            self.filters.remove(name);
        } else {
            self.filters.insert(name, value.to_string());
        }
        self.publish()
    }

    /// Current value of filter `name`, or `None` if it is not set.
    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    // ========================================================================
    // Derived view
    // ========================================================================

    /// Whether `item` passes the current search text and filters.
    pub fn matches(&self, item: &T) -> bool {
        matches_search(item, &self.search)
            && self
                .filters
                .iter()
                .all(|(name, value)| item.matches_filter(name, value))
    }

    /// Recompute the visible records from scratch.
    pub fn visible_items(&self) -> Vec<(ItemId, &T)> {
        self.entries
            .iter()
            .filter(|(_, item)| self.matches(item))
            .map(|(id, item)| (*id, item))
            .collect()
    }

    /// Last published snapshot.
    pub fn snapshot(&self) -> &VisibleSnapshot<T> {
        &self.snapshot
    }

    /// Recompute and publish the visible snapshot.
    pub fn publish(&mut self) -> VisibleSnapshot<T> {
        let rows: Vec<(ItemId, T)> = self
            .visible_items()
            .into_iter()
            .map(|(id, item)| (id, item.clone()))
            .collect();
        self.snapshot = VisibleSnapshot {
            revision: self.snapshot.revision + 1,
            rows: Arc::from(rows),
        };
        self.snapshot.clone()
    }

    // ========================================================================
    // Source collection
    // ========================================================================

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All source records in insertion order, ignoring search and filters.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &T)> {
        self.entries.iter().map(|(id, item)| (*id, item))
    }

    /// Remove exactly the record with `id`.
    pub fn remove_item(&mut self, id: ItemId) -> Option<T> {
        let index = self.entries.iter().position(|(entry_id, _)| *entry_id == id)?;
        let (_, item) = self.entries.remove(index);
        self.publish();
        Some(item)
    }

    /// Keep only records for which `keep` returns true. Returns how many were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|(_, item)| keep(item));
        self.publish();
        before - self.entries.len()
    }

    /// Remove every record.
    pub fn clear(&mut self) -> VisibleSnapshot<T> {
        self.entries.clear();
        self.publish()
    }
}
