//! Section Status
//!
//! Aggregate progress of each section, used to pick which sections start
//! expanded.

use std::collections::BTreeSet;

use crate::domain::{AgendaGroup, Hierarchy, ItemStatus};

/// Counts of a section's children by progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionStatus {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl SectionStatus {
    pub fn of(group: &AgendaGroup) -> Self {
        group
            .children
            .iter()
            .fold(Self::default(), |mut acc, child| {
                acc.total += 1;
                match child.status {
                    ItemStatus::InProgress => acc.in_progress += 1,
                    ItemStatus::Completed => acc.completed += 1,
                    _ => {}
                }
                acc
            })
    }

    /// At least one child is in progress
    pub fn is_active(&self) -> bool {
        self.in_progress > 0
    }

    /// Every child is completed (never true for an empty section)
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Indices of sections with an in-progress child
pub fn active_sections(hierarchy: &Hierarchy) -> BTreeSet<usize> {
    hierarchy
        .iter()
        .enumerate()
        .filter(|(_, group)| SectionStatus::of(group).is_active())
        .map(|(idx, _)| idx)
        .collect()
}
