//! Agent response write-back use-case.
//!
//! # Responsibility
//! - Resolve one respond target by stable id or derived path.
//! - Write response text and completion flag through the store.
//!
//! # Invariants
//! - Exact stable-id match is preferred; path matching takes the FIRST exact
//!   match in enumeration order (duplicate paths are a documented caller
//!   limitation, not a selection rule).
//! - A failed lookup mutates nothing and never creates a record.

use crate::model::note::NoteId;
use crate::scene::EntityId;
use crate::service::query::NoteView;
use crate::store::note_store::{NoteStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input for one respond call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RespondRequest {
    /// Hierarchy path of the target note's owner. May be empty when
    /// `note_id` is supplied.
    pub path: String,
    /// Preferred exact-match target. Falls back to `path` when absent or
    /// unmatched.
    pub note_id: Option<NoteId>,
    /// Response text; empty clears/keeps the response display-empty.
    pub response: String,
    /// Completion flag to set on the target note.
    pub completed: bool,
}

/// Respond-side service error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RespondError {
    /// Neither a note id nor a non-blank path was supplied.
    MissingPath,
    /// No attached note matched the supplied target.
    NotFound(String),
    /// Store-level failure during write-back.
    Store(StoreError),
}

impl Display for RespondError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPath => write!(
                f,
                "respond requires a non-empty path or a note_id identifying the target note"
            ),
            Self::NotFound(target) => write!(f, "no sticky note found at: {target}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RespondError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RespondError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Write-path service attaching agent responses to note records.
pub struct NoteResponseService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteResponseService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes a response and completion flag onto one matching note.
    ///
    /// # Contract
    /// - Mutates exactly one record on success, zero on failure.
    /// - Marks the owning host entity dirty as part of the write.
    ///
    /// # Errors
    /// - `MissingPath` when the request carries no usable target.
    /// - `NotFound` when no attached note matches id or path.
    pub fn respond(&mut self, request: &RespondRequest) -> Result<NoteView, RespondError> {
        let path = request.path.trim();
        if path.is_empty() && request.note_id.is_none() {
            return Err(RespondError::MissingPath);
        }

        let target = self
            .resolve_target(path, request.note_id)
            .ok_or_else(|| RespondError::NotFound(describe_target(path, request.note_id)))?;

        let updated = self
            .store
            .write_response(target, request.response.as_str(), request.completed)?;
        let updated_path = self
            .store
            .entity_path(target)
            .unwrap_or_else(|| path.to_string());
        info!(
            "event=note_response module=service note_id={} completed={}",
            updated.note.id, updated.note.completed
        );
        Ok(NoteView::project(updated_path, &updated))
    }

    /// Resolves the respond target: stable id first, then first path match in
    /// enumeration order.
    fn resolve_target(&self, path: &str, note_id: Option<NoteId>) -> Option<EntityId> {
        let records = self.store.enumerate();

        if let Some(id) = note_id {
            if let Some(found) = records.iter().find(|record| record.note.id == id) {
                return Some(found.entity);
            }
        }

        if path.is_empty() {
            return None;
        }
        records
            .iter()
            .find(|record| {
                self.store
                    .entity_path(record.entity)
                    .is_some_and(|derived| derived == path)
            })
            .map(|record| record.entity)
    }
}

fn describe_target(path: &str, note_id: Option<NoteId>) -> String {
    match note_id {
        Some(id) if path.is_empty() => format!("note_id {id}"),
        Some(id) => format!("{path} (note_id {id})"),
        None => path.to_string(),
    }
}
