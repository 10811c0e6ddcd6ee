//! Meeting Payload
//!
//! One meeting's agenda as delivered by the host.

use serde::{Deserialize, Serialize};

use super::item::AgendaItem;

/// Identifier of a meeting; also the selection scope key
pub type MeetingId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    #[serde(default)]
    pub items: Vec<AgendaItem>,
}
