//! Id -> position lookup for the hierarchy, rebuilt after every structural
//! change so drag events resolve in constant time.

use std::collections::HashMap;

use crate::domain::{DropTargetId, Hierarchy, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Top-level section at this index
    Section(usize),
    /// Child item at `pos` within section `group`
    Child { group: usize, pos: usize },
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SlotIndex {
    slots: HashMap<ItemId, Slot>,
}

impl SlotIndex {
    pub(crate) fn build(hierarchy: &Hierarchy) -> Self {
        let mut slots = HashMap::new();
        for (group, section) in hierarchy.iter().enumerate() {
            slots.insert(section.id(), Slot::Section(group));
            for (pos, child) in section.children.iter().enumerate() {
                slots.insert(child.id, Slot::Child { group, pos });
            }
        }
        Self { slots }
    }

    pub(crate) fn get(&self, id: ItemId) -> Option<Slot> {
        self.slots.get(&id).copied()
    }

    pub(crate) fn contains(&self, id: ItemId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Section index owning a container drop target
    pub(crate) fn container(&self, target: DropTargetId) -> Option<usize> {
        match self.get(target.group_id()) {
            Some(Slot::Section(group)) => Some(group),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgendaGroup, AgendaItem, ItemStatus};

    #[test]
    fn test_build_index() {
        let mut first = AgendaGroup::new(AgendaItem::section(1, "a", ItemStatus::NotStarted));
        first.children.push(AgendaItem::child(3, 1, "c", ItemStatus::NotStarted));
        first.children.push(AgendaItem::child(4, 1, "d", ItemStatus::NotStarted));
        let second = AgendaGroup::new(AgendaItem::section(2, "b", ItemStatus::NotStarted));
        let index = SlotIndex::build(&Hierarchy::new(vec![first, second]));

        assert_eq!(index.get(2), Some(Slot::Section(1)));
        assert_eq!(index.get(4), Some(Slot::Child { group: 0, pos: 1 }));
        assert_eq!(index.container(DropTargetId(2)), Some(1));
        // a child id is not a container
        assert_eq!(index.container(DropTargetId(3)), None);
        assert!(!index.contains(9));
    }
}
