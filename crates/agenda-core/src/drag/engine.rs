//! Drag Engine
//!
//! State machine behind section/item reordering.
//!
//! While a child item is dragged across sections it is moved immediately
//! (live preview), so the user sees it inside the new section before
//! letting go. Moves within the same section are only resolved on drop.
//! Sections themselves are only reordered on drop.

use log::{debug, warn};

use super::index::{Slot, SlotIndex};
use super::{DragEvent, DragOutcome, OverTarget};
use crate::domain::{Hierarchy, ItemId};

/// Where a dragged child lands inside a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Take the place of the item at this index
    At(usize),
    /// Before the first child (pointer on the section header)
    Front,
    /// After the last child (pointer on the container)
    Back,
}

#[derive(Debug, Clone)]
struct DragContext {
    active: ItemId,
    /// Order before the gesture started
    snapshot: Hierarchy,
    last_over: Option<OverTarget>,
}

#[derive(Debug, Clone, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragContext),
}

/// Owner of the authoritative hierarchy during and between drags
#[derive(Debug, Clone, Default)]
pub struct DragEngine {
    hierarchy: Hierarchy,
    index: SlotIndex,
    state: DragState,
}

impl DragEngine {
    pub fn new(hierarchy: Hierarchy) -> Self {
        let index = SlotIndex::build(&hierarchy);
        Self {
            hierarchy,
            index,
            state: DragState::Idle,
        }
    }

    /// Current authoritative order
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Owned copy of the current order
    pub fn snapshot(&self) -> Hierarchy {
        self.hierarchy.clone()
    }

    /// Replace the whole hierarchy (external refresh). Aborts any gesture.
    pub fn replace(&mut self, hierarchy: Hierarchy) {
        if self.is_dragging() {
            warn!("hierarchy replaced during a drag; gesture dropped");
        }
        self.hierarchy = hierarchy;
        self.reindex();
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Id being dragged, if any
    pub fn active_id(&self) -> Option<ItemId> {
        match &self.state {
            DragState::Dragging(ctx) => Some(ctx.active),
            DragState::Idle => None,
        }
    }

    /// Target of the most recent `over` event in this gesture
    pub fn last_over(&self) -> Option<OverTarget> {
        match &self.state {
            DragState::Dragging(ctx) => ctx.last_over,
            DragState::Idle => None,
        }
    }

    pub fn is_section(&self, id: ItemId) -> bool {
        matches!(self.index.get(id), Some(Slot::Section(_)))
    }

    pub fn handle(&mut self, event: DragEvent) -> DragOutcome {
        match event {
            DragEvent::Start(id) => self.start(id),
            DragEvent::Over { active, over } => self.over(active, over),
            DragEvent::End { active, over } => self.end(active, over),
            DragEvent::Cancel => self.cancel(),
        }
    }

    pub fn start(&mut self, id: ItemId) -> DragOutcome {
        if let DragState::Dragging(ctx) = &self.state {
            warn!("drag start for {} while {} is still dragged", id, ctx.active);
            return DragOutcome::Ignored;
        }
        if !self.index.contains(id) {
            warn!("drag start for unknown item {}", id);
            return DragOutcome::Ignored;
        }

        debug!("drag start {}", id);
        self.state = DragState::Dragging(DragContext {
            active: id,
            snapshot: self.hierarchy.clone(),
            last_over: None,
        });
        DragOutcome::Started
    }

    pub fn over(&mut self, active: ItemId, over: Option<OverTarget>) -> DragOutcome {
        let DragState::Dragging(ctx) = &mut self.state else {
            return DragOutcome::Ignored;
        };
        if ctx.active != active {
            warn!("drag over for {} but {} is dragged", active, ctx.active);
            return DragOutcome::Ignored;
        }
        ctx.last_over = over;

        let Some(target) = over else {
            return DragOutcome::Ignored;
        };
        if self.move_across(active, target) {
            DragOutcome::Previewed
        } else {
            DragOutcome::Ignored
        }
    }

    pub fn end(&mut self, active: ItemId, over: Option<OverTarget>) -> DragOutcome {
        let ctx = match std::mem::take(&mut self.state) {
            DragState::Dragging(ctx) if ctx.active == active => ctx,
            other => {
                self.state = other;
                warn!("drag end for {} does not match the current gesture", active);
                return DragOutcome::Ignored;
            }
        };

        match over {
            Some(target) if target != OverTarget::Item(active) => match self.index.get(active) {
                Some(Slot::Section(from)) => self.drop_section(from, target),
                Some(Slot::Child { .. }) => self.drop_child(active, target),
                None => warn!("dropped item {} is no longer in the agenda", active),
            },
            _ => {}
        }

        if self.hierarchy == ctx.snapshot {
            debug!("drag end {}: order unchanged", active);
            DragOutcome::Unchanged
        } else {
            debug!("drag end {}: order committed", active);
            DragOutcome::Committed(self.hierarchy.clone())
        }
    }

    pub fn cancel(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(ctx) => {
                debug!("drag cancel {}", ctx.active);
                self.hierarchy = ctx.snapshot;
                self.reindex();
                DragOutcome::Cancelled
            }
            DragState::Idle => DragOutcome::Ignored,
        }
    }

    /// Resolve what the pointer is over to a section index and placement
    fn resolve(&self, target: OverTarget) -> Option<(usize, Placement)> {
        match target {
            OverTarget::Item(id) => match self.index.get(id)? {
                Slot::Section(group) => Some((group, Placement::Front)),
                Slot::Child { group, pos } => Some((group, Placement::At(pos))),
            },
            OverTarget::Container(drop_target) => {
                Some((self.index.container(drop_target)?, Placement::Back))
            }
        }
    }

    /// Move a dragged child into the section under the pointer.
    ///
    /// Returns false when nothing moved: the active id is a section, the
    /// target is unknown, or the child already lives in the target section.
    fn move_across(&mut self, active: ItemId, target: OverTarget) -> bool {
        let Some(Slot::Child { group: from, pos }) = self.index.get(active) else {
            return false;
        };
        let Some((to, placement)) = self.resolve(target) else {
            return false;
        };
        if from == to {
            return false;
        }

        let groups = self.hierarchy.groups_mut();
        let mut item = groups[from].children.remove(pos);
        item.parent_id = Some(groups[to].id());
        let children = &mut groups[to].children;
        let at = match placement {
            Placement::At(idx) => idx.min(children.len()),
            Placement::Front => 0,
            Placement::Back => children.len(),
        };
        children.insert(at, item);
        debug!("drag preview: {} moved to section {} at {}", active, to, at);

        self.reindex();
        true
    }

    fn drop_section(&mut self, from: usize, target: OverTarget) {
        let to = match target {
            OverTarget::Item(id) => match self.index.get(id) {
                Some(Slot::Section(group)) | Some(Slot::Child { group, .. }) => Some(group),
                None => None,
            },
            OverTarget::Container(drop_target) => self.index.container(drop_target),
        };
        let Some(to) = to else {
            warn!("section drop target {:?} not found", target);
            return;
        };

        array_move(self.hierarchy.groups_mut(), from, to);
        self.reindex();
    }

    fn drop_child(&mut self, active: ItemId, target: OverTarget) {
        // No `over` was delivered for this target; the move already lands
        // the item at the pointer.
        if self.move_across(active, target) {
            return;
        }

        let Some(Slot::Child { group, pos }) = self.index.get(active) else {
            return;
        };
        let Some((to_group, placement)) = self.resolve(target) else {
            warn!("item drop target {:?} not found", target);
            return;
        };
        if to_group != group {
            return;
        }

        let children = &mut self.hierarchy.groups_mut()[group].children;
        let to = match placement {
            Placement::At(idx) => idx,
            Placement::Front => 0,
            Placement::Back => children.len() - 1,
        };
        array_move(children, pos, to);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index = SlotIndex::build(&self.hierarchy);
    }
}

/// Move one element from `from` to `to`, shifting the ones in between
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgendaGroup, AgendaItem, DropTargetId, ItemStatus};

    fn make_group(id: ItemId, children: &[ItemId]) -> AgendaGroup {
        let mut group = AgendaGroup::new(AgendaItem::section(id, format!("Section {}", id), ItemStatus::NotStarted));
        for child in children {
            group
                .children
                .push(AgendaItem::child(*child, id, format!("Item {}", child), ItemStatus::NotStarted));
        }
        group
    }

    fn engine() -> DragEngine {
        DragEngine::new(Hierarchy::new(vec![
            make_group(1, &[10, 11, 12]),
            make_group(2, &[20, 21]),
            make_group(3, &[]),
        ]))
    }

    fn layout(engine: &DragEngine) -> Vec<(ItemId, Vec<ItemId>)> {
        engine
            .hierarchy()
            .iter()
            .map(|g| (g.id(), g.children.iter().map(|c| c.id).collect()))
            .collect()
    }

    #[test]
    fn test_array_move() {
        let mut v = vec![1, 2, 3, 4];
        array_move(&mut v, 0, 2);
        assert_eq!(v, vec![2, 3, 1, 4]);
        array_move(&mut v, 3, 0);
        assert_eq!(v, vec![4, 2, 3, 1]);
        array_move(&mut v, 1, 9);
        assert_eq!(v, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_start_and_cancel_transitions() {
        let mut engine = engine();
        assert_eq!(engine.start(10), DragOutcome::Started);
        assert_eq!(engine.active_id(), Some(10));
        assert_eq!(engine.start(11), DragOutcome::Ignored);
        assert_eq!(engine.cancel(), DragOutcome::Cancelled);
        assert!(!engine.is_dragging());
        assert_eq!(engine.cancel(), DragOutcome::Ignored);
    }

    #[test]
    fn test_start_unknown_id_stays_idle() {
        let mut engine = engine();
        assert_eq!(engine.start(99), DragOutcome::Ignored);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut engine = engine();
        let before = engine.snapshot();
        assert_eq!(engine.over(10, Some(OverTarget::Item(20))), DragOutcome::Ignored);
        assert_eq!(engine.end(10, Some(OverTarget::Item(20))), DragOutcome::Ignored);
        assert_eq!(engine.hierarchy(), &before);
    }

    #[test]
    fn test_over_other_section_moves_at_pointer() {
        let mut engine = engine();
        engine.start(10);
        assert_eq!(engine.over(10, Some(OverTarget::Item(21))), DragOutcome::Previewed);
        assert_eq!(
            layout(&engine),
            vec![(1, vec![11, 12]), (2, vec![20, 10, 21]), (3, vec![])]
        );
        let moved = &engine.hierarchy().groups()[1].children[1];
        assert_eq!(moved.parent_id, Some(2));
        assert_eq!(engine.last_over(), Some(OverTarget::Item(21)));
    }

    #[test]
    fn test_over_is_idempotent() {
        let mut engine = engine();
        engine.start(10);
        engine.over(10, Some(OverTarget::Item(21)));
        let once = engine.snapshot();
        assert_eq!(engine.over(10, Some(OverTarget::Item(21))), DragOutcome::Ignored);
        assert_eq!(engine.hierarchy(), &once);
    }

    #[test]
    fn test_over_same_section_is_deferred() {
        let mut engine = engine();
        let before = engine.snapshot();
        engine.start(10);
        assert_eq!(engine.over(10, Some(OverTarget::Item(12))), DragOutcome::Ignored);
        assert_eq!(engine.hierarchy(), &before);
    }

    #[test]
    fn test_over_empty_container_appends() {
        let mut engine = engine();
        engine.start(12);
        engine.over(12, Some(OverTarget::Container(DropTargetId(3))));
        assert_eq!(layout(&engine)[2], (3, vec![12]));
    }

    #[test]
    fn test_over_section_header_inserts_first() {
        let mut engine = engine();
        engine.start(12);
        engine.over(12, Some(OverTarget::Item(2)));
        assert_eq!(layout(&engine)[1], (2, vec![12, 20, 21]));
    }

    #[test]
    fn test_over_unknown_target_is_ignored() {
        let mut engine = engine();
        let before = engine.snapshot();
        engine.start(10);
        assert_eq!(engine.over(10, Some(OverTarget::Item(77))), DragOutcome::Ignored);
        assert_eq!(engine.over(10, Some(OverTarget::Container(DropTargetId(10)))), DragOutcome::Ignored);
        assert_eq!(engine.over(10, None), DragOutcome::Ignored);
        assert_eq!(engine.hierarchy(), &before);
    }

    #[test]
    fn test_section_drag_over_is_ignored() {
        let mut engine = engine();
        let before = engine.snapshot();
        engine.start(1);
        assert_eq!(engine.over(1, Some(OverTarget::Item(2))), DragOutcome::Ignored);
        assert_eq!(engine.hierarchy(), &before);
    }

    #[test]
    fn test_last_child_leaves_empty_section() {
        let mut engine = DragEngine::new(Hierarchy::new(vec![make_group(1, &[10]), make_group(2, &[])]));
        engine.start(10);
        engine.over(10, Some(OverTarget::Container(DropTargetId(2))));
        let outcome = engine.end(10, Some(OverTarget::Item(10)));
        assert!(outcome.committed().is_some());
        assert_eq!(layout(&engine), vec![(1, vec![]), (2, vec![10])]);
    }

    #[test]
    fn test_drop_within_section() {
        let mut engine = engine();
        engine.start(10);
        let outcome = engine.end(10, Some(OverTarget::Item(12)));
        assert!(matches!(outcome, DragOutcome::Committed(_)));
        assert_eq!(layout(&engine)[0], (1, vec![11, 12, 10]));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut engine = engine();
        engine.start(10);
        assert_eq!(engine.end(10, Some(OverTarget::Item(10))), DragOutcome::Unchanged);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_drop_without_target_keeps_preview() {
        let mut engine = engine();
        engine.start(10);
        engine.over(10, Some(OverTarget::Item(20)));
        let outcome = engine.end(10, None);
        assert!(outcome.committed().is_some());
        assert_eq!(layout(&engine)[1], (2, vec![10, 20, 21]));
    }

    #[test]
    fn test_drop_in_other_section_without_preview() {
        let mut engine = engine();
        engine.start(11);
        engine.end(11, Some(OverTarget::Item(21)));
        assert_eq!(
            layout(&engine),
            vec![(1, vec![10, 12]), (2, vec![20, 11, 21]), (3, vec![])]
        );
    }

    #[test]
    fn test_drop_after_preview_reorders_in_new_section() {
        let mut engine = engine();
        engine.start(10);
        engine.over(10, Some(OverTarget::Item(20)));
        engine.end(10, Some(OverTarget::Item(21)));
        assert_eq!(layout(&engine)[1], (2, vec![20, 21, 10]));
    }

    #[test]
    fn test_section_reorder_on_drop() {
        let mut engine = engine();
        engine.start(1);
        engine.end(1, Some(OverTarget::Item(2)));
        assert_eq!(
            layout(&engine),
            vec![(2, vec![20, 21]), (1, vec![10, 11, 12]), (3, vec![])]
        );
    }

    #[test]
    fn test_section_drop_on_child_uses_its_section() {
        let mut engine = engine();
        engine.start(3);
        engine.end(3, Some(OverTarget::Item(10)));
        let order: Vec<_> = engine.hierarchy().iter().map(|g| g.id()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_section_drop_unresolved_is_noop() {
        let mut engine = engine();
        let before = engine.snapshot();
        engine.start(1);
        assert_eq!(engine.end(1, Some(OverTarget::Item(404))), DragOutcome::Unchanged);
        assert_eq!(engine.hierarchy(), &before);
    }

    #[test]
    fn test_cancel_restores_snapshot() {
        let mut engine = engine();
        let before = engine.snapshot();
        engine.start(10);
        engine.over(10, Some(OverTarget::Item(20)));
        engine.over(10, Some(OverTarget::Container(DropTargetId(3))));
        assert_ne!(engine.hierarchy(), &before);
        engine.handle(DragEvent::Cancel);
        assert_eq!(engine.hierarchy(), &before);
        // index follows the restored order
        engine.start(10);
        engine.end(10, Some(OverTarget::Item(11)));
        assert_eq!(layout(&engine)[0], (1, vec![11, 10, 12]));
    }

    #[test]
    fn test_mismatched_end_keeps_gesture() {
        let mut engine = engine();
        engine.start(10);
        assert_eq!(engine.end(11, Some(OverTarget::Item(12))), DragOutcome::Ignored);
        assert_eq!(engine.active_id(), Some(10));
    }

    #[test]
    fn test_replace_aborts_gesture() {
        let mut engine = engine();
        engine.start(10);
        engine.replace(Hierarchy::new(vec![make_group(5, &[50])]));
        assert!(!engine.is_dragging());
        assert!(engine.is_section(5));
        assert!(!engine.is_section(50));
    }
}
