//! Agenda Group and Hierarchy
//!
//! The two-level view over a meeting's agenda: ordered sections, each with
//! an ordered list of child items.

use serde::{Deserialize, Serialize};

use super::item::{AgendaItem, ItemId};

/// Drop target for a section's item container.
///
/// Lives in its own namespace so that dropping into a (possibly empty)
/// container is never confused with dropping on the section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DropTargetId(pub ItemId);

impl DropTargetId {
    /// Id of the section owning this container
    pub fn group_id(&self) -> ItemId {
        self.0
    }
}

impl std::fmt::Display for DropTargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "drop-{}", self.0)
    }
}

/// A section together with its ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaGroup {
    /// The section's own record
    pub item: AgendaItem,
    /// Child items in display order
    pub children: Vec<AgendaItem>,
    /// Container drop target, distinct from `item.id`
    pub drop_target: DropTargetId,
}

impl AgendaGroup {
    /// Create an empty group for a section item
    pub fn new(item: AgendaItem) -> Self {
        let drop_target = DropTargetId(item.id);
        Self {
            item,
            children: Vec::new(),
            drop_target,
        }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.children.iter().position(|child| child.id == id)
    }
}

/// Flattened placement of one item, as handed to persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPosition {
    pub id: ItemId,
    /// Owning section (None = section itself)
    pub parent_id: Option<ItemId>,
    /// Zero-based index among siblings
    pub position: u32,
}

/// Ordered sequence of agenda groups
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hierarchy {
    groups: Vec<AgendaGroup>,
}

impl Hierarchy {
    pub fn new(groups: Vec<AgendaGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[AgendaGroup] {
        &self.groups
    }

    pub(crate) fn groups_mut(&mut self) -> &mut Vec<AgendaGroup> {
        &mut self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgendaGroup> {
        self.groups.iter()
    }

    pub fn group(&self, id: ItemId) -> Option<&AgendaGroup> {
        self.groups.iter().find(|group| group.id() == id)
    }

    /// Ids of every section and child, sections first within each group
    pub fn ids(&self) -> Vec<ItemId> {
        self.groups
            .iter()
            .flat_map(|group| {
                std::iter::once(group.id()).chain(group.children.iter().map(|child| child.id))
            })
            .collect()
    }

    /// Flatten back into a flat item list (section, its children, next section...)
    pub fn flatten(&self) -> Vec<AgendaItem> {
        let mut items = Vec::new();
        for group in &self.groups {
            items.push(group.item.clone());
            items.extend(group.children.iter().cloned());
        }
        items
    }

    /// Current ordering of every item, for committing to storage
    pub fn positions(&self) -> Vec<ItemPosition> {
        let mut positions = Vec::new();
        for (group_pos, group) in self.groups.iter().enumerate() {
            positions.push(ItemPosition {
                id: group.id(),
                parent_id: None,
                position: group_pos as u32,
            });
            for (child_pos, child) in group.children.iter().enumerate() {
                positions.push(ItemPosition {
                    id: child.id,
                    parent_id: Some(group.id()),
                    position: child_pos as u32,
                });
            }
        }
        positions
    }
}

impl<'a> IntoIterator for &'a Hierarchy {
    type Item = &'a AgendaGroup;
    type IntoIter = std::slice::Iter<'a, AgendaGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
