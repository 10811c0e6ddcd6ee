//! Agenda Board
//!
//! One meeting's agenda state as seen by the view: authoritative order
//! (via [`DragEngine`]), the show-completed toggle, multi-selection and
//! which sections are expanded. Every accessor hands out read-only data or
//! owned snapshots.

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::config::BoardConfig;
use crate::domain::{AgendaItem, Hierarchy, ItemId, ItemPosition, Meeting, MeetingId};
use crate::drag::{DragEngine, DragOutcome, OverTarget};
use crate::error::AgendaResult;
use crate::grouping::{group, Orphan};
use crate::selection::SelectionSet;
use crate::status::active_sections;
use crate::visibility::filter;

#[derive(Debug, Clone)]
pub struct AgendaBoard {
    meeting_id: MeetingId,
    config: BoardConfig,
    engine: DragEngine,
    selection: SelectionSet<MeetingId>,
    show_completed: bool,
    /// Expanded sections, by section id
    expanded: BTreeSet<ItemId>,
}

impl AgendaBoard {
    /// Build the board for a meeting. Orphaned children are returned for
    /// the caller to report; duplicate ids fail.
    pub fn new(meeting: &Meeting, config: BoardConfig) -> AgendaResult<(Self, Vec<Orphan>)> {
        let grouped = group(&meeting.items)?;

        let expanded = if config.expand_active {
            active_sections(&grouped.hierarchy)
                .into_iter()
                .filter_map(|idx| grouped.hierarchy.groups().get(idx).map(|g| g.id()))
                .collect()
        } else {
            BTreeSet::new()
        };
        debug!(
            "agenda board for meeting {}: {} sections, {} expanded",
            meeting.id,
            grouped.hierarchy.len(),
            expanded.len()
        );

        let board = Self {
            meeting_id: meeting.id,
            config,
            engine: DragEngine::new(grouped.hierarchy),
            selection: SelectionSet::new(),
            show_completed: config.show_completed,
            expanded,
        };
        Ok((board, grouped.orphans))
    }

    pub fn meeting_id(&self) -> MeetingId {
        self.meeting_id
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Authoritative order, including completed entries
    pub fn hierarchy(&self) -> &Hierarchy {
        self.engine.hierarchy()
    }

    /// What is displayed given the show-completed toggle
    pub fn view(&self) -> Hierarchy {
        filter(self.engine.hierarchy(), self.show_completed)
    }

    pub fn positions(&self) -> Vec<ItemPosition> {
        self.engine.hierarchy().positions()
    }

    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    pub fn toggle_show_completed(&mut self) -> bool {
        self.show_completed = !self.show_completed;
        self.show_completed
    }

    /// Replace the agenda after an external refresh.
    ///
    /// Any drag in progress is abandoned and selections of items that no
    /// longer exist are dropped. Expanded sections are left as they were.
    pub fn reload(&mut self, items: &[AgendaItem]) -> AgendaResult<Vec<Orphan>> {
        let grouped = group(items)?;
        let known: BTreeSet<ItemId> = grouped.hierarchy.ids().into_iter().collect();

        let stale: Vec<ItemId> = self
            .selection
            .selected_in(&self.meeting_id)
            .map(|ids| ids.iter().copied().filter(|id| !known.contains(id)).collect())
            .unwrap_or_default();
        for id in stale {
            self.selection = self.selection.toggle(self.meeting_id, id, false);
        }
        self.expanded.retain(|id| known.contains(id));

        self.engine.replace(grouped.hierarchy);
        Ok(grouped.orphans)
    }

    // ========================
    // Selection
    // ========================

    pub fn selection(&self) -> &SelectionSet<MeetingId> {
        &self.selection
    }

    pub fn is_selected(&self, item_id: ItemId) -> bool {
        self.selection.contains(&self.meeting_id, item_id)
    }

    pub fn select(&mut self, item_id: ItemId, selected: bool) {
        self.selection = self.selection.toggle(self.meeting_id, item_id, selected);
    }

    pub fn selected_count(&self) -> usize {
        self.selection.total()
    }

    pub fn cancel_selection(&mut self) {
        self.selection = self.selection.clear();
    }

    // ========================
    // Expansion
    // ========================

    pub fn expanded(&self) -> &BTreeSet<ItemId> {
        &self.expanded
    }

    pub fn is_expanded(&self, group_id: ItemId) -> bool {
        self.expanded.contains(&group_id)
    }

    pub fn toggle_expanded(&mut self, group_id: ItemId) -> bool {
        if !self.expanded.remove(&group_id) {
            self.expanded.insert(group_id);
        }
        self.is_expanded(group_id)
    }

    /// Indices (in the authoritative order) of sections with an in-progress child
    pub fn active_sections(&self) -> BTreeSet<usize> {
        active_sections(self.engine.hierarchy())
    }

    // ========================
    // Drag and drop
    // ========================

    pub fn dragging(&self) -> Option<ItemId> {
        self.engine.active_id()
    }

    pub fn drag_start(&mut self, id: ItemId) -> DragOutcome {
        if !self.config.reorderable {
            warn!("drag start for {} on a read-only agenda", id);
            return DragOutcome::Ignored;
        }
        self.engine.start(id)
    }

    pub fn drag_over(&mut self, active: ItemId, over: Option<OverTarget>) -> DragOutcome {
        self.engine.over(active, over)
    }

    pub fn drag_end(&mut self, active: ItemId, over: Option<OverTarget>) -> DragOutcome {
        self.engine.end(active, over)
    }

    pub fn drag_cancel(&mut self) -> DragOutcome {
        self.engine.cancel()
    }
}
