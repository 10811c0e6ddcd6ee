//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use agenda_core::{AgendaBoard, BoardConfig, DragOutcome, Meeting};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Meeting whose agenda is shown
    pub meeting_id: u32,
    /// Agenda state for the loaded meeting (None until the first load)
    pub board: Option<AgendaBoard>,
    /// Board switches, loaded once from the backend
    pub config: BoardConfig,
    /// Last load failure, shown above the agenda
    pub load_error: Option<String>,
}

impl AppState {
    pub fn new(meeting_id: u32) -> Self {
        Self {
            meeting_id,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install freshly loaded meeting data.
///
/// The first load (or a different meeting) builds a new board; later loads
/// of the same meeting refresh it in place so selection and expanded
/// sections survive.
pub fn store_load_meeting(store: &AppStore, meeting: &Meeting) {
    let config = store.config().get_untracked();
    let result = {
        let board_field = store.board();
        let mut board = board_field.write();
        if let Some(current) = board.as_mut().filter(|b| b.meeting_id() == meeting.id) {
            current.reload(&meeting.items)
        } else {
            AgendaBoard::new(meeting, config).map(|(fresh, orphans)| {
                *board = Some(fresh);
                orphans
            })
        }
    };

    match result {
        Ok(orphans) => {
            for orphan in orphans {
                web_sys::console::warn_1(
                    &format!("[AGENDA] item {} references unknown section {}", orphan.id, orphan.parent_id).into(),
                );
            }
            *store.load_error().write() = None;
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[AGENDA] meeting {} rejected: {}", meeting.id, e).into());
            *store.load_error().write() = Some(e.to_string());
        }
    }
}

/// Run a mutation against the board, if one is loaded
pub fn store_with_board<R>(store: &AppStore, f: impl FnOnce(&mut AgendaBoard) -> R) -> Option<R> {
    store.board().write().as_mut().map(f)
}

/// Apply a drag event to the board
pub fn store_drag(store: &AppStore, f: impl FnOnce(&mut AgendaBoard) -> DragOutcome) -> DragOutcome {
    store_with_board(store, f).unwrap_or(DragOutcome::Ignored)
}
