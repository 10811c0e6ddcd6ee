//! Agenda error types.

use thiserror::Error;

use crate::domain::ItemId;

/// Common result type for agenda operations
pub type AgendaResult<T> = Result<T, AgendaError>;

/// Failures that must stop the caller instead of degrading silently
#[derive(Debug, Error)]
pub enum AgendaError {
    /// The same id appears more than once in the input collection
    #[error("duplicate agenda item id {id}")]
    DuplicateId { id: ItemId },

    #[error("invalid board configuration: {0}")]
    Config(#[from] serde_json::Error),
}
