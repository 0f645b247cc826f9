//! Sticky note domain record.
//!
//! # Responsibility
//! - Define the note entity attached to one scene entity at a time.
//! - Provide lifecycle helpers for response write-back semantics.
//!
//! # Invariants
//! - `id` is stable and never reused for another note; replacing a note
//!   destroys the old record and creates a fresh one with a new `id`.
//! - `message` is set once at creation and never mutated afterwards.
//! - Empty `message`/`response` means "absent"; callers must treat empty and
//!   absent as display-equivalent.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one sticky note record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// One sticky note attached to a scene entity.
///
/// The record intentionally carries no hierarchy path: the path is a display
/// and lookup convenience derived from the owning entity at query time, so
/// two queries may report different paths for the same record when the
/// hierarchy changed in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickyNote {
    /// Stable note ID used for exact-match response targeting.
    pub id: NoteId,
    /// Free-text instruction for the agent. Set once at creation.
    pub message: String,
    /// Signed sort key; lower values are listed first. No uniqueness.
    pub priority: i32,
    /// Agent write-back text. Empty until the first respond call; every
    /// respond call overwrites the previous value.
    pub response: String,
    /// Completion flag written back together with `response`.
    pub completed: bool,
}

impl StickyNote {
    /// Creates a new note with a generated stable ID.
    ///
    /// # Invariants
    /// - `response` starts empty and `completed` starts `false`.
    pub fn new(message: impl Into<String>, priority: i32) -> Self {
        Self::with_id(Uuid::new_v4(), message, priority)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by import/replay paths where identity already exists externally.
    pub fn with_id(id: NoteId, message: impl Into<String>, priority: i32) -> Self {
        Self {
            id,
            message: message.into(),
            priority,
            response: String::new(),
            completed: false,
        }
    }

    /// Overwrites the response text and completion flag in one step.
    ///
    /// Later calls replace earlier ones; there is no response history.
    pub fn set_response(&mut self, response: impl Into<String>, completed: bool) {
        self.response = response.into();
        self.completed = completed;
    }

    /// Returns whether an agent has written any response yet.
    pub fn has_response(&self) -> bool {
        !self.response.is_empty()
    }
}
