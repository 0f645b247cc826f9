//! Read-only note listing use-case.
//!
//! # Responsibility
//! - Project attached notes into agent-facing views sorted by priority.
//! - Derive each record's current hierarchy path at query time.
//!
//! # Invariants
//! - Sorting is stable: equal priorities keep host enumeration order, so
//!   repeated calls with no intervening mutation return identical listings.
//! - An empty scope is a normal result with a distinct message, never an
//!   error.

use crate::model::note::NoteId;
use crate::store::note_store::{AttachedNote, NoteStore};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Guidance appended to every listing so the agent knows how to write back.
pub const RESPOND_HINT: &str = "Each note is a request from the developer. After handling one, \
     call read_sticky_notes again with action=respond, the note's path, a \
     response_message describing what was done, and completed=true.";

/// Agent-facing projection of one attached note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteView {
    /// Stable note id; preferred respond target.
    pub id: NoteId,
    /// Hierarchy path derived at query time. Not a stable identity.
    pub path: String,
    /// Developer instruction text.
    pub message: String,
    /// Sort key; lower values are listed first.
    pub priority: i32,
    /// Agent response text; empty until the first respond call.
    pub response: String,
    /// Completion flag.
    pub completed: bool,
}

impl NoteView {
    /// Builds a view from one enumerated record and its derived path.
    pub fn project(path: String, attached: &AttachedNote) -> Self {
        Self {
            id: attached.note.id,
            path,
            message: attached.note.message.clone(),
            priority: attached.note.priority,
            response: attached.note.response.clone(),
            completed: attached.note.completed,
        }
    }
}

/// Listing envelope returned to the agent tool layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListing {
    /// Number of notes in `notes`.
    pub count: usize,
    /// Views sorted by priority ascending, ties in enumeration order.
    pub notes: Vec<NoteView>,
    /// Human-readable result summary.
    pub message: String,
    /// Guidance for the agent's follow-up respond call.
    pub hint: String,
}

/// Query-side service error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A record's owning entity vanished between enumeration and projection.
    InconsistentState(&'static str),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InconsistentState(details) => {
                write!(f, "inconsistent note listing state: {details}")
            }
        }
    }
}

impl Error for QueryError {}

/// Read-only listing service over a note store.
pub struct NoteQueryService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteQueryService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists every attached note sorted by priority ascending.
    ///
    /// # Contract
    /// - Stable sort: equal priorities keep enumeration order.
    /// - No side effects.
    ///
    /// # Errors
    /// - `InconsistentState` when a path cannot be derived for an enumerated
    ///   record, which indicates a host contract violation.
    pub fn list_all(&self) -> Result<NoteListing, QueryError> {
        let mut records = self.store.enumerate();
        records.sort_by_key(|record| record.note.priority);

        let mut notes = Vec::with_capacity(records.len());
        for record in &records {
            let path = self
                .store
                .entity_path(record.entity)
                .ok_or(QueryError::InconsistentState(
                    "enumerated note owner has no derivable path",
                ))?;
            notes.push(NoteView::project(path, record));
        }

        let count = notes.len();
        let message = if count == 0 {
            "No sticky notes found in the current scene.".to_string()
        } else {
            format!("Found {count} sticky note(s) sorted by priority.")
        };

        Ok(NoteListing {
            count,
            notes,
            message,
            hint: RESPOND_HINT.to_string(),
        })
    }
}
