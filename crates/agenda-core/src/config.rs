//! Board Configuration
//!
//! Host-supplied switches for one agenda board. Every field has a default so
//! an empty object (or a missing config) yields the stock behaviour.

use serde::{Deserialize, Serialize};

use crate::error::AgendaResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Initial state of the "show closed" toggle
    #[serde(default = "default_true")]
    pub show_completed: bool,
    /// Whether the viewer may reorder sections and items
    #[serde(default = "default_true")]
    pub reorderable: bool,
    /// Start with sections that have an in-progress child expanded
    #[serde(default = "default_true")]
    pub expand_active: bool,
}

fn default_true() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            show_completed: true,
            reorderable: true,
            expand_active: true,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> AgendaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
