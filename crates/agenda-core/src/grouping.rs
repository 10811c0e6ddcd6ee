//! Agenda Grouping
//!
//! Builds the two-level hierarchy from a meeting's flat item list.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::domain::{AgendaGroup, AgendaItem, Entity, Hierarchy, ItemId};
use crate::error::{AgendaError, AgendaResult};

/// A child whose parent is not a known section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orphan {
    pub id: ItemId,
    pub parent_id: ItemId,
}

/// Result of grouping: the hierarchy plus items that could not be placed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grouped {
    pub hierarchy: Hierarchy,
    pub orphans: Vec<Orphan>,
}

/// Group a flat item list into sections with ordered children.
///
/// Sections keep their input order; children keep their input order within
/// each section. Children pointing at an unknown section (or at another
/// child) are left out and reported in [`Grouped::orphans`]. Duplicate ids
/// fail the whole call.
pub fn group(items: &[AgendaItem]) -> AgendaResult<Grouped> {
    if let Some(id) = find_duplicate(items) {
        return Err(AgendaError::DuplicateId { id });
    }

    let mut groups: Vec<AgendaGroup> = items
        .iter()
        .filter(|item| item.is_section())
        .map(|item| AgendaGroup::new(item.clone()))
        .collect();

    // Section id -> index into `groups`
    let by_id: HashMap<ItemId, usize> = groups
        .iter()
        .enumerate()
        .map(|(idx, group)| (group.id(), idx))
        .collect();

    let mut orphans = Vec::new();
    for item in items {
        let Some(parent_id) = item.parent_id else { continue };
        match by_id.get(&parent_id) {
            Some(&idx) => groups[idx].children.push(item.clone()),
            None => {
                warn!("agenda item {} references unknown section {}", item.id, parent_id);
                orphans.push(Orphan { id: item.id, parent_id });
            }
        }
    }

    Ok(Grouped {
        hierarchy: Hierarchy::new(groups),
        orphans,
    })
}

fn find_duplicate<T: Entity>(entities: &[T]) -> Option<T::Id> {
    let mut seen = HashSet::with_capacity(entities.len());
    entities
        .iter()
        .map(T::id)
        .find(|id| !seen.insert(*id))
}
