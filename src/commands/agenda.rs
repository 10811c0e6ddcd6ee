//! Agenda Commands
//!
//! Loading a meeting's agenda and handing the committed order back to the
//! backend, which owns persistence.

use agenda_core::{BoardConfig, ItemPosition, Meeting};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct MeetingIdArgs {
    #[serde(rename = "meetingId")]
    meeting_id: u32,
}

#[derive(Serialize)]
struct ReorderArgs<'a> {
    #[serde(rename = "meetingId")]
    meeting_id: u32,
    positions: &'a [ItemPosition],
}

// ========================
// Commands
// ========================

pub async fn get_meeting(meeting_id: u32) -> Result<Meeting, String> {
    let js_args = serde_wasm_bindgen::to_value(&MeetingIdArgs { meeting_id }).map_err(|e| e.to_string())?;
    let result = invoke("get_meeting", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Board switches as a JSON document; missing or empty means defaults
pub async fn get_board_config() -> Result<BoardConfig, String> {
    let result = invoke("get_agenda_config", JsValue::NULL).await;
    match result.as_string() {
        Some(json) if !json.trim().is_empty() => BoardConfig::from_json(&json).map_err(|e| e.to_string()),
        _ => Ok(BoardConfig::default()),
    }
}

pub async fn reorder_agenda(meeting_id: u32, positions: &[ItemPosition]) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&ReorderArgs { meeting_id, positions }).map_err(|e| e.to_string())?;
    invoke("reorder_agenda_items", js_args).await;
    Ok(())
}
