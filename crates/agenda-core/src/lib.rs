//! Agenda Core
//!
//! Turns a meeting's flat agenda items into ordered sections with children,
//! and keeps that order consistent while the user drags sections and items
//! around. Also derives the "hide completed" view, the multi-selection set
//! and the sections that start expanded.
//!
//! Layout:
//! - domain: agenda entities and the hierarchy
//! - grouping / visibility / status: pure derivations
//! - selection: scope-keyed multi-select
//! - drag: the drag-and-drop state machine
//! - board: per-meeting facade used by the view

pub mod board;
pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod grouping;
pub mod selection;
pub mod status;
pub mod visibility;

pub use board::AgendaBoard;
pub use config::BoardConfig;
pub use domain::{AgendaGroup, AgendaItem, DropTargetId, Entity, Hierarchy, ItemId, ItemPosition, ItemStatus, Meeting, MeetingId};
pub use drag::{DragEngine, DragEvent, DragOutcome, OverTarget};
pub use error::{AgendaError, AgendaResult};
pub use grouping::{group, Grouped, Orphan};
pub use selection::SelectionSet;
pub use status::{active_sections, SectionStatus};
pub use visibility::filter;
