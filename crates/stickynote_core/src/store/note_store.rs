//! Note store contract and scene-backed implementation.
//!
//! # Responsibility
//! - Provide a live view over notes attached to host entities.
//! - Route response write-backs and batched removals to the host.
//!
//! # Invariants
//! - `enumerate` returns records in host enumeration order and never errors;
//!   an empty scope yields an empty sequence.
//! - `write_response` marks the owning entity dirty as part of the write.
//! - `remove_notes` forwards the whole target set in one host call so the
//!   host records a single undoable unit.

use crate::model::note::StickyNote;
use crate::scene::{EntityId, Scene, SceneError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for note view and write-back operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Owning entity does not exist in the host scope.
    EntityNotFound(EntityId),
    /// Entity exists but carries no note record.
    NoteMissing(EntityId),
    /// Unclassified host-side failure.
    Host(SceneError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntityNotFound(id) => write!(f, "note owner entity not found: {id}"),
            Self::NoteMissing(id) => write!(f, "no note attached to entity: {id}"),
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Host(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SceneError> for StoreError {
    fn from(value: SceneError) -> Self {
        match value {
            SceneError::EntityNotFound(id) => Self::EntityNotFound(id),
            SceneError::NoteMissing(id) => Self::NoteMissing(id),
            other => Self::Host(other),
        }
    }
}

/// One note record together with its owning entity handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedNote {
    /// Owning host entity.
    pub entity: EntityId,
    /// Note record snapshot at enumeration time.
    pub note: StickyNote,
}

/// Live-view store contract over host-owned note records.
pub trait NoteStore {
    /// Enumerates every attached note in host enumeration order.
    fn enumerate(&self) -> Vec<AttachedNote>;
    /// Derives the current hierarchy path for one entity.
    fn entity_path(&self, entity: EntityId) -> Option<String>;
    /// Writes response text and completion flag onto one attached note and
    /// marks the owning entity dirty.
    fn write_response(
        &mut self,
        entity: EntityId,
        response: &str,
        completed: bool,
    ) -> StoreResult<AttachedNote>;
    /// Destroys the notes attached to the given entities as one batch.
    fn remove_notes(&mut self, targets: &[EntityId]) -> usize;
}

/// Scene-backed note store.
pub struct SceneNoteStore<'scene> {
    scene: &'scene mut Scene,
}

impl<'scene> SceneNoteStore<'scene> {
    /// Creates a store fronting the given scene.
    pub fn new(scene: &'scene mut Scene) -> Self {
        Self { scene }
    }
}

impl NoteStore for SceneNoteStore<'_> {
    fn enumerate(&self) -> Vec<AttachedNote> {
        self.scene
            .entities_with_notes()
            .map(|(entity, note)| AttachedNote {
                entity: entity.id,
                note: note.clone(),
            })
            .collect()
    }

    fn entity_path(&self, entity: EntityId) -> Option<String> {
        self.scene.entity_path(entity)
    }

    fn write_response(
        &mut self,
        entity: EntityId,
        response: &str,
        completed: bool,
    ) -> StoreResult<AttachedNote> {
        let note = self.scene.set_note_response(entity, response, completed)?;
        Ok(AttachedNote {
            entity,
            note: note.clone(),
        })
    }

    fn remove_notes(&mut self, targets: &[EntityId]) -> usize {
        self.scene.detach_notes(targets)
    }
}
