//! Note editing dialog capability seam.
//!
//! # Responsibility
//! - Define the single dialog contract that presentation implementations
//!   plug into (modal, utility and immediate-mode variants all collapse to
//!   this one interface).
//! - Drive a dialog outcome against the scene's note lifecycle operations.
//!
//! # Invariants
//! - `Create` fails when the target already carries a note; `Replace` is the
//!   explicit flow for overwriting.
//! - `Replace` destroys the existing record and attaches a fresh one with a
//!   new stable ID.
//! - `Keep` and `Cancel` never touch the scene.

use crate::model::note::{NoteId, StickyNote};
use crate::scene::{EntityId, Scene, SceneError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome selected by the user in a note dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Attach a new note with the entered message and priority.
    Create { message: String, priority: i32 },
    /// Destroy the existing note and attach a fresh one.
    Replace { message: String, priority: i32 },
    /// Keep the existing note untouched.
    Keep,
    /// Abort without changes.
    Cancel,
}

/// Presentation capability contract for note creation/replacement.
///
/// Implementations live outside the core; tests use scripted fakes.
pub trait NoteDialog {
    /// Shows the dialog for one target entity and its existing note, if any.
    fn show(&mut self, target: EntityId, existing: Option<&StickyNote>) -> DialogOutcome;
}

/// Scene effect of one completed dialog interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResult {
    /// A new note was attached.
    Created(NoteId),
    /// The existing note was destroyed and recreated.
    Replaced(NoteId),
    /// The existing note was kept.
    Kept,
    /// The interaction was aborted.
    Cancelled,
}

/// Errors from applying a dialog outcome to the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Host-side lifecycle failure (missing entity, occupied/empty slot).
    Scene(SceneError),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scene(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Scene(err) => Some(err),
        }
    }
}

impl From<SceneError> for EditError {
    fn from(value: SceneError) -> Self {
        Self::Scene(value)
    }
}

/// Runs one dialog interaction for a target entity and applies the outcome.
///
/// # Errors
/// - `Scene(EntityNotFound)` when the target does not exist.
/// - `Scene(NoteAlreadyAttached)` when `Create` races an existing note.
/// - `Scene(NoteMissing)` when `Replace` is chosen without an existing note.
pub fn edit_note(
    scene: &mut Scene,
    dialog: &mut impl NoteDialog,
    target: EntityId,
) -> Result<EditResult, EditError> {
    let existing = scene
        .entity(target)
        .ok_or(SceneError::EntityNotFound(target))?
        .note
        .clone();

    match dialog.show(target, existing.as_ref()) {
        DialogOutcome::Create { message, priority } => {
            let note_id = scene.attach_note(target, message, priority)?;
            Ok(EditResult::Created(note_id))
        }
        DialogOutcome::Replace { message, priority } => {
            let note_id = scene.replace_note(target, message, priority)?;
            Ok(EditResult::Replaced(note_id))
        }
        DialogOutcome::Keep => Ok(EditResult::Kept),
        DialogOutcome::Cancel => Ok(EditResult::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::{edit_note, DialogOutcome, EditError, EditResult, NoteDialog};
    use crate::model::note::StickyNote;
    use crate::scene::{EntityId, Scene, SceneError};
    use uuid::Uuid;

    /// Scripted dialog returning a fixed outcome; records what it was shown.
    struct ScriptedDialog {
        outcome: DialogOutcome,
        saw_existing: bool,
    }

    impl ScriptedDialog {
        fn new(outcome: DialogOutcome) -> Self {
            Self {
                outcome,
                saw_existing: false,
            }
        }
    }

    impl NoteDialog for ScriptedDialog {
        fn show(&mut self, _target: EntityId, existing: Option<&StickyNote>) -> DialogOutcome {
            self.saw_existing = existing.is_some();
            self.outcome.clone()
        }
    }

    #[test]
    fn create_outcome_attaches_a_note() {
        let mut scene = Scene::new();
        let cube = scene.spawn("Cube", None).expect("spawn");
        let mut dialog = ScriptedDialog::new(DialogOutcome::Create {
            message: "align to grid".to_string(),
            priority: 2,
        });

        let result = edit_note(&mut scene, &mut dialog, cube).expect("edit");
        assert!(matches!(result, EditResult::Created(_)));
        assert!(!dialog.saw_existing);
        let note = scene.entity(cube).and_then(|e| e.note.clone()).expect("note");
        assert_eq!(note.message, "align to grid");
    }

    #[test]
    fn replace_outcome_sees_existing_and_issues_new_id() {
        let mut scene = Scene::new();
        let cube = scene.spawn("Cube", None).expect("spawn");
        let first = scene.attach_note(cube, "old", 1).expect("attach");
        let mut dialog = ScriptedDialog::new(DialogOutcome::Replace {
            message: "new".to_string(),
            priority: 3,
        });

        let result = edit_note(&mut scene, &mut dialog, cube).expect("edit");
        assert!(dialog.saw_existing);
        match result {
            EditResult::Replaced(new_id) => assert_ne!(new_id, first),
            other => panic!("expected Replaced, got {other:?}"),
        }
    }

    #[test]
    fn keep_and_cancel_leave_scene_untouched() {
        let mut scene = Scene::new();
        let cube = scene.spawn("Cube", None).expect("spawn");
        scene.attach_note(cube, "unchanged", 1).expect("attach");
        let before = scene.entity(cube).and_then(|e| e.note.clone());

        let mut keep = ScriptedDialog::new(DialogOutcome::Keep);
        assert_eq!(
            edit_note(&mut scene, &mut keep, cube).expect("keep"),
            EditResult::Kept
        );
        let mut cancel = ScriptedDialog::new(DialogOutcome::Cancel);
        assert_eq!(
            edit_note(&mut scene, &mut cancel, cube).expect("cancel"),
            EditResult::Cancelled
        );
        assert_eq!(scene.entity(cube).and_then(|e| e.note.clone()), before);
    }

    #[test]
    fn edit_rejects_unknown_target() {
        let mut scene = Scene::new();
        let ghost = Uuid::new_v4();
        let mut dialog = ScriptedDialog::new(DialogOutcome::Cancel);
        let err = edit_note(&mut scene, &mut dialog, ghost).expect_err("unknown target");
        assert_eq!(err, EditError::Scene(SceneError::EntityNotFound(ghost)));
    }
}
