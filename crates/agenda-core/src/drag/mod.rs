//! Drag-and-drop reordering
//!
//! [`DragEngine`] owns the authoritative hierarchy and applies the drag
//! gesture lifecycle to it: start, any number of live `over` previews, then
//! either `end` (commit) or `cancel` (restore the pre-drag snapshot).

mod engine;
mod index;

use serde::{Deserialize, Serialize};

use crate::domain::{DropTargetId, Hierarchy, ItemId};

pub use engine::DragEngine;

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverTarget {
    /// A section header or a child item row
    Item(ItemId),
    /// A section's item container (reachable even when it is empty)
    Container(DropTargetId),
}

/// Drag lifecycle event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Start(ItemId),
    Over {
        active: ItemId,
        over: Option<OverTarget>,
    },
    End {
        active: ItemId,
        over: Option<OverTarget>,
    },
    Cancel,
}

/// Effect of one drag event on the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing changed (idle engine, stale id, unresolved target, ...)
    Ignored,
    Started,
    /// A child was moved into another section as a live preview
    Previewed,
    /// Gesture finished and the order differs from before the drag
    Committed(Hierarchy),
    /// Gesture finished with the order as it was before the drag
    Unchanged,
    /// Gesture aborted, pre-drag order restored
    Cancelled,
}

impl DragOutcome {
    /// Snapshot to hand to persistence, if the drop changed anything
    pub fn committed(&self) -> Option<&Hierarchy> {
        match self {
            DragOutcome::Committed(hierarchy) => Some(hierarchy),
            _ => None,
        }
    }
}
