//! Visibility Filter
//!
//! Derives the display view of a hierarchy. The authoritative hierarchy is
//! only ever read here; every returned group owns freshly built children.

use crate::domain::{AgendaGroup, Hierarchy};

/// Build the view shown to the user.
///
/// With `show_completed` set this is a plain copy. Otherwise completed
/// sections are dropped and completed children are left out of the
/// remaining sections, with ordering untouched.
pub fn filter(hierarchy: &Hierarchy, show_completed: bool) -> Hierarchy {
    if show_completed {
        return hierarchy.clone();
    }

    let groups = hierarchy
        .iter()
        .filter(|group| !group.item.status.is_completed())
        .map(|group| AgendaGroup {
            item: group.item.clone(),
            children: group
                .children
                .iter()
                .filter(|child| !child.status.is_completed())
                .cloned()
                .collect(),
            drop_target: group.drop_target,
        })
        .collect();

    Hierarchy::new(groups)
}
