//! Domain Layer
//!
//! Agenda entities and the two-level hierarchy built from them.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod group;
mod item;
mod meeting;

pub use entity::Entity;
pub use group::{AgendaGroup, DropTargetId, Hierarchy, ItemPosition};
pub use item::{AgendaItem, ItemId, ItemStatus};
pub use meeting::{Meeting, MeetingId};
