//! Core domain logic for scene sticky notes.
//! This crate is the single source of truth for note identity, ordering and
//! response write-back invariants; transports and UI live in host embedders.

pub mod dialog;
pub mod logging;
pub mod model;
pub mod scene;
pub mod service;
pub mod store;
pub mod tool;

pub use dialog::{edit_note, DialogOutcome, EditError, EditResult, NoteDialog};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{NoteId, StickyNote};
pub use scene::{EntityId, Scene, SceneEntity, SceneError, SceneResult};
pub use service::query::{NoteListing, NoteQueryService, NoteView, QueryError, RESPOND_HINT};
pub use service::removal::{NoteRemovalService, RemovalReport};
pub use service::respond::{NoteResponseService, RespondError, RespondRequest};
pub use store::note_store::{AttachedNote, NoteStore, SceneNoteStore, StoreError, StoreResult};
pub use tool::{
    dispatch_tool, handle_read_sticky_notes, tool_descriptor, ToolDescriptor, ToolParams,
    ToolResponse, ToolStatus, TOOL_NAME,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
