//! `read_sticky_notes` agent tool surface.
//!
//! # Responsibility
//! - Parse the MCP-style parameter object and route by tool name and action.
//! - Shape every outcome into the `{status, message, data}` envelope.
//!
//! # Invariants
//! - Dispatch never panics; malformed input becomes an error envelope.
//! - Error envelopes carry a human-readable cause and an empty `data` object.
//! - Bulk removal is deliberately absent from this surface; it is a
//!   host/presentation operation only.

use crate::model::note::NoteId;
use crate::service::query::NoteQueryService;
use crate::service::respond::{NoteResponseService, RespondRequest};
use crate::store::note_store::NoteStore;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

/// Tool name registered with the external MCP dispatcher.
pub const TOOL_NAME: &str = "read_sticky_notes";

/// Registration metadata handed to the external dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// Returns the descriptor for the sticky-note tool.
pub fn tool_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME,
        description: "Reads sticky notes attached to scene entities sorted by priority, \
             and writes back agent responses with a completion flag. \
             Actions: get_all (default), respond.",
    }
}

/// Raw parameter object for one tool call.
///
/// Unknown fields are ignored so dispatcher-side envelope additions do not
/// break parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToolParams {
    /// `get_all` (default when absent) or `respond`.
    #[serde(default)]
    pub action: Option<String>,
    /// Hierarchy path target; required for `respond` unless `note_id` is
    /// given.
    #[serde(default)]
    pub path: Option<String>,
    /// Stable note id target, preferred over `path` when it matches.
    #[serde(default)]
    pub note_id: Option<String>,
    /// Response text to write back.
    #[serde(default)]
    pub response_message: Option<String>,
    /// Completion flag; defaults to false when absent.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Envelope status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Success,
    Error,
}

/// Response envelope returned to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Overall outcome.
    pub status: ToolStatus,
    /// Human-readable result or error cause.
    pub message: String,
    /// Action-specific payload; empty object on error.
    pub data: Value,
}

impl ToolResponse {
    fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            status: ToolStatus::Success,
            message: message.into(),
            data,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Error,
            message: message.into(),
            data: json!({}),
        }
    }
}

/// Routes one dispatcher call by tool name.
///
/// # Contract
/// - Unknown tool names produce an error envelope, not a panic.
/// - The store is consumed by exactly one action handler.
pub fn dispatch_tool<S: NoteStore>(store: S, tool: &str, params: &Value) -> ToolResponse {
    if tool != TOOL_NAME {
        return ToolResponse::error(format!("unknown tool: {tool}"));
    }
    handle_read_sticky_notes(store, params)
}

/// Handles one `read_sticky_notes` call.
///
/// # Contract
/// - Absent/null `action` defaults to `get_all`.
/// - Never panics; every failure is an error envelope.
pub fn handle_read_sticky_notes<S: NoteStore>(store: S, params: &Value) -> ToolResponse {
    let parsed: ToolParams = match serde_json::from_value(params.clone()) {
        Ok(parsed) => parsed,
        Err(err) => {
            return ToolResponse::error(format!("invalid tool parameters: {err}"));
        }
    };

    let action = parsed.action.as_deref().unwrap_or("get_all");
    let response = match action {
        "get_all" => run_get_all(store),
        "respond" => run_respond(store, &parsed),
        other => ToolResponse::error(format!(
            "unknown action: `{other}`; expected get_all or respond"
        )),
    };

    info!(
        "event=tool_dispatch module=tool tool={TOOL_NAME} action={action} status={}",
        match response.status {
            ToolStatus::Success => "success",
            ToolStatus::Error => "error",
        }
    );
    response
}

fn run_get_all<S: NoteStore>(store: S) -> ToolResponse {
    let service = NoteQueryService::new(store);
    match service.list_all() {
        Ok(listing) => ToolResponse::success(
            listing.message,
            json!({
                "notes": listing.notes,
                "hint": listing.hint,
            }),
        ),
        Err(err) => ToolResponse::error(err.to_string()),
    }
}

fn run_respond<S: NoteStore>(store: S, params: &ToolParams) -> ToolResponse {
    let path = params
        .path
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let note_id = match parse_note_id(params.note_id.as_deref()) {
        Ok(note_id) => note_id,
        Err(message) => return ToolResponse::error(message),
    };
    if path.is_empty() && note_id.is_none() {
        return ToolResponse::error(
            "missing required parameter: path (or note_id) for action respond",
        );
    }

    let request = RespondRequest {
        path,
        note_id,
        response: params.response_message.clone().unwrap_or_default(),
        completed: params.completed.unwrap_or(false),
    };

    let mut service = NoteResponseService::new(store);
    match service.respond(&request) {
        Ok(view) => ToolResponse::success(
            format!("Response recorded for `{}`.", view.path),
            json!({
                "id": view.id,
                "path": view.path,
                "message": view.message,
                "response": view.response,
                "completed": view.completed,
            }),
        ),
        Err(err) => ToolResponse::error(err.to_string()),
    }
}

fn parse_note_id(raw: Option<&str>) -> Result<Option<NoteId>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Uuid::parse_str(value)
            .map(Some)
            .map_err(|_| format!("invalid note_id: `{value}` is not a valid id")),
    }
}
