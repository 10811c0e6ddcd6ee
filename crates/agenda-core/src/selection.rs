//! Selection Store
//!
//! Multi-select bookkeeping for bulk actions, keyed by scope (a meeting).
//! A scope is present only while it has at least one selected item.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet<K: Ord> {
    scopes: BTreeMap<K, BTreeSet<ItemId>>,
}

impl<K: Ord> Default for SelectionSet<K> {
    fn default() -> Self {
        Self {
            scopes: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> SelectionSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new selection with `item_id` added to or removed from `scope`.
    ///
    /// Removing the last item of a scope drops the scope entry.
    pub fn toggle(&self, scope: K, item_id: ItemId, selected: bool) -> Self {
        let mut next = self.clone();
        if selected {
            next.scopes.entry(scope).or_default().insert(item_id);
        } else if let Some(items) = next.scopes.get_mut(&scope) {
            items.remove(&item_id);
            if items.is_empty() {
                next.scopes.remove(&scope);
            }
        }
        next
    }

    /// The empty selection
    pub fn clear(&self) -> Self {
        Self::default()
    }

    pub fn contains(&self, scope: &K, item_id: ItemId) -> bool {
        self.scopes
            .get(scope)
            .is_some_and(|items| items.contains(&item_id))
    }

    pub fn selected_in(&self, scope: &K) -> Option<&BTreeSet<ItemId>> {
        self.scopes.get(scope)
    }

    pub fn scopes(&self) -> impl Iterator<Item = &K> {
        self.scopes.keys()
    }

    /// Number of selected items across all scopes
    pub fn total(&self) -> usize {
        self.scopes.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
