//! Agenda Item Entity
//!
//! A single agenda entry. Items without a parent are sections; items with a
//! parent are children listed under that section.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Identifier shared by sections and child items.
pub type ItemId = u32;

/// Progress state of an agenda item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    NotStarted,
    /// Currently being discussed
    InProgress,
    /// Closed; hidden when completed items are filtered out
    Completed,
    Pending,
    /// Any status this crate does not interpret
    #[serde(other)]
    Unknown,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "NOT_STARTED",
            ItemStatus::InProgress => "IN_PROGRESS",
            ItemStatus::Completed => "COMPLETED",
            ItemStatus::Pending => "PENDING",
            ItemStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "NOT_STARTED" => ItemStatus::NotStarted,
            "IN_PROGRESS" => ItemStatus::InProgress,
            "COMPLETED" => ItemStatus::Completed,
            "PENDING" => ItemStatus::Pending,
            _ => ItemStatus::Unknown,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ItemStatus::Completed)
    }
}

/// One agenda entry as loaded from meeting data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Unique identifier within the meeting
    pub id: ItemId,
    /// Owning section (None = this item is a section)
    #[serde(default, alias = "parent_meeting_item_id")]
    pub parent_id: Option<ItemId>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, alias = "title_loc_key")]
    pub title: String,
    #[serde(default, alias = "description_loc_key")]
    pub description: String,
}

impl AgendaItem {
    /// Create a new section (top-level item)
    pub fn section(id: ItemId, title: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            id,
            parent_id: None,
            status,
            title: title.into(),
            description: String::new(),
        }
    }

    /// Create a new child item under a section
    pub fn child(id: ItemId, parent_id: ItemId, title: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            id,
            parent_id: Some(parent_id),
            status,
            title: title.into(),
            description: String::new(),
        }
    }

    /// Check if this is a section (no parent)
    pub fn is_section(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Entity for AgendaItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_creation() {
        let item = AgendaItem::section(1, "Opening", ItemStatus::NotStarted);
        assert_eq!(item.id(), 1);
        assert!(item.is_section());
    }

    #[test]
    fn test_child_creation() {
        let child = AgendaItem::child(2, 1, "Roll call", ItemStatus::InProgress);
        assert_eq!(child.parent_id, Some(1));
        assert!(!child.is_section());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(ItemStatus::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(ItemStatus::from_str("COMPLETED"), ItemStatus::Completed);
        assert_eq!(ItemStatus::from_str("ARCHIVED"), ItemStatus::Unknown);
    }

    #[test]
    fn test_decode_meeting_payload_fields() {
        let json = r#"{
            "id": 7,
            "parent_meeting_item_id": 3,
            "status": "IN_PROGRESS",
            "title_loc_key": "Budget",
            "description_loc_key": "Q3 numbers"
        }"#;
        let item: AgendaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.parent_id, Some(3));
        assert_eq!(item.status, ItemStatus::InProgress);
        assert_eq!(item.title, "Budget");
    }

    #[test]
    fn test_decode_unknown_status() {
        let json = r#"{"id": 1, "parent_id": null, "status": "DEFERRED"}"#;
        let item: AgendaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, ItemStatus::Unknown);
        assert!(item.is_section());
    }
}
