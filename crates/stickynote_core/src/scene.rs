//! In-memory scene host for note-bearing entities.
//!
//! # Responsibility
//! - Own the entity hierarchy that note records are attached to.
//! - Provide host lifecycle operations: spawn, attach/replace/detach notes.
//! - Derive slash-joined hierarchy paths on demand.
//!
//! # Invariants
//! - Enumeration order is entity insertion order and never changes without a
//!   mutation in between.
//! - A parent must exist before a child can be spawned under it; parents are
//!   fixed at spawn time, so the containment chain is acyclic.
//! - Each entity holds at most one note; replace destroys the old record and
//!   attaches a fresh one with a new stable ID.
//! - One `detach_notes` call is one undoable unit in the detach history.

use crate::model::note::{NoteId, StickyNote};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one scene entity.
pub type EntityId = Uuid;

/// Result type used by scene host operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors from scene host lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Target entity does not exist in this scene.
    EntityNotFound(EntityId),
    /// Entity already carries a note; replace is the explicit flow for that.
    NoteAlreadyAttached(EntityId),
    /// Entity carries no note to replace or update.
    NoteMissing(EntityId),
    /// Entity names must be non-blank to keep derived paths meaningful.
    BlankEntityName,
}

impl Display for SceneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntityNotFound(id) => write!(f, "scene entity not found: {id}"),
            Self::NoteAlreadyAttached(id) => {
                write!(f, "entity already has a sticky note attached: {id}")
            }
            Self::NoteMissing(id) => write!(f, "entity has no sticky note attached: {id}"),
            Self::BlankEntityName => write!(f, "entity name must not be blank"),
        }
    }
}

impl Error for SceneError {}

/// One entity in the scene containment hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEntity {
    /// Stable entity id.
    pub id: EntityId,
    /// Display name; one segment of the derived hierarchy path.
    pub name: String,
    /// Parent entity id. `None` means root-level entity.
    pub parent: Option<EntityId>,
    /// Attached note record, if any.
    pub note: Option<StickyNote>,
    /// Unsaved-changes marker maintained by the host.
    pub dirty: bool,
}

/// In-memory scene owning entities and their attached notes.
#[derive(Debug, Default)]
pub struct Scene {
    entities: Vec<SceneEntity>,
    detach_history: Vec<Vec<(EntityId, StickyNote)>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns one entity under an optional existing parent.
    ///
    /// # Errors
    /// - `BlankEntityName` when `name` trims to empty.
    /// - `EntityNotFound` when `parent` does not exist.
    pub fn spawn(&mut self, name: &str, parent: Option<EntityId>) -> SceneResult<EntityId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SceneError::BlankEntityName);
        }
        if let Some(parent_id) = parent {
            if self.index_of(parent_id).is_none() {
                return Err(SceneError::EntityNotFound(parent_id));
            }
        }

        let id = Uuid::new_v4();
        self.entities.push(SceneEntity {
            id,
            name: trimmed.to_string(),
            parent,
            note: None,
            dirty: false,
        });
        Ok(id)
    }

    /// Returns one entity by id.
    pub fn entity(&self, id: EntityId) -> Option<&SceneEntity> {
        self.index_of(id).map(|index| &self.entities[index])
    }

    /// Returns entity count, including note-less entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Derives the slash-joined hierarchy path root-to-leaf for one entity.
    ///
    /// Returns `None` when the entity does not exist. The path is recomputed
    /// on every call; it is not a stable identity.
    pub fn entity_path(&self, id: EntityId) -> Option<String> {
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let entity = self.entity(current)?;
            segments.push(entity.name.as_str());
            cursor = entity.parent;
        }
        segments.reverse();
        Some(segments.join("/"))
    }

    /// Iterates entities that currently carry a note, in enumeration order.
    pub fn entities_with_notes(&self) -> impl Iterator<Item = (&SceneEntity, &StickyNote)> {
        self.entities
            .iter()
            .filter_map(|entity| entity.note.as_ref().map(|note| (entity, note)))
    }

    /// Attaches a fresh note record to one entity.
    ///
    /// # Errors
    /// - `EntityNotFound` when the entity does not exist.
    /// - `NoteAlreadyAttached` when a note is already present.
    pub fn attach_note(
        &mut self,
        entity: EntityId,
        message: impl Into<String>,
        priority: i32,
    ) -> SceneResult<NoteId> {
        let index = self
            .index_of(entity)
            .ok_or(SceneError::EntityNotFound(entity))?;
        if self.entities[index].note.is_some() {
            return Err(SceneError::NoteAlreadyAttached(entity));
        }

        let note = StickyNote::new(message, priority);
        let note_id = note.id;
        self.entities[index].note = Some(note);
        self.entities[index].dirty = true;
        Ok(note_id)
    }

    /// Replaces the existing note record with a fresh one (new stable ID).
    ///
    /// # Errors
    /// - `EntityNotFound` when the entity does not exist.
    /// - `NoteMissing` when there is nothing to replace.
    pub fn replace_note(
        &mut self,
        entity: EntityId,
        message: impl Into<String>,
        priority: i32,
    ) -> SceneResult<NoteId> {
        let index = self
            .index_of(entity)
            .ok_or(SceneError::EntityNotFound(entity))?;
        if self.entities[index].note.is_none() {
            return Err(SceneError::NoteMissing(entity));
        }

        let note = StickyNote::new(message, priority);
        let note_id = note.id;
        self.entities[index].note = Some(note);
        self.entities[index].dirty = true;
        Ok(note_id)
    }

    /// Writes response text and completion flag onto one attached note.
    ///
    /// Marks the owning entity dirty so the host includes it in the next
    /// save.
    ///
    /// # Errors
    /// - `EntityNotFound` when the entity does not exist.
    /// - `NoteMissing` when the entity carries no note.
    pub fn set_note_response(
        &mut self,
        entity: EntityId,
        response: &str,
        completed: bool,
    ) -> SceneResult<&StickyNote> {
        let index = self
            .index_of(entity)
            .ok_or(SceneError::EntityNotFound(entity))?;
        let slot = &mut self.entities[index];
        if slot.note.is_none() {
            return Err(SceneError::NoteMissing(entity));
        }
        slot.dirty = true;
        let note = slot.note.as_mut().ok_or(SceneError::NoteMissing(entity))?;
        note.set_response(response, completed);
        Ok(note)
    }

    /// Detaches notes from the given entities as one batch.
    ///
    /// Unknown entities and note-less entities are skipped. A non-empty batch
    /// is recorded as a single unit in the detach history. Returns the number
    /// of notes removed.
    pub fn detach_notes(&mut self, targets: &[EntityId]) -> usize {
        let mut batch = Vec::new();
        for entity in &mut self.entities {
            if targets.contains(&entity.id) {
                if let Some(note) = entity.note.take() {
                    entity.dirty = true;
                    batch.push((entity.id, note));
                }
            }
        }

        let removed = batch.len();
        if removed > 0 {
            debug!("event=notes_detached module=scene count={removed}");
            self.detach_history.push(batch);
        }
        removed
    }

    /// Restores the most recent detach batch.
    ///
    /// Notes are restored only into entities that still exist and whose note
    /// slot is still empty. Returns the number of notes restored.
    pub fn undo_last_detach(&mut self) -> usize {
        let Some(batch) = self.detach_history.pop() else {
            return 0;
        };

        let mut restored = 0;
        for (entity_id, note) in batch {
            if let Some(index) = self.index_of(entity_id) {
                let slot = &mut self.entities[index];
                if slot.note.is_none() {
                    slot.note = Some(note);
                    slot.dirty = true;
                    restored += 1;
                }
            }
        }
        restored
    }

    /// Returns the unsaved-changes marker for one entity.
    pub fn is_dirty(&self, entity: EntityId) -> bool {
        self.entity(entity).is_some_and(|found| found.dirty)
    }

    /// Clears dirty markers, emulating a host save.
    pub fn clear_dirty(&mut self) {
        for entity in &mut self.entities {
            entity.dirty = false;
        }
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id == id)
    }
}
