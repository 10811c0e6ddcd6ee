//! UI Components
//!
//! Leptos components rendering the agenda.

mod agenda_group;
mod agenda_item;
mod agenda_view;
mod selection_box;

pub use agenda_group::AgendaGroupView;
pub use agenda_item::AgendaItemRow;
pub use agenda_view::AgendaView;
pub use selection_box::MultipleSelectionBox;
