//! Bulk note removal use-cases.
//!
//! # Responsibility
//! - Remove the completed subset or every note on host/presentation request.
//! - Report distinct outcomes for "removed N" versus "nothing to do".
//!
//! # Invariants
//! - Targets are collected first and destroyed in ONE batched store call, so
//!   the host records a single undoable unit and a reader never observes a
//!   partially-removed set.
//! - Zero matches is an informational no-op, never an error.
//! - These operations are host-triggered only; the agent tool surface does
//!   not expose them.

use crate::store::note_store::NoteStore;
use log::info;

/// Outcome of one bulk removal call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalReport {
    /// Number of notes destroyed.
    pub removed: usize,
    /// Human-readable outcome, distinct for the no-op case.
    pub message: String,
}

/// Host-facing bulk removal service.
pub struct NoteRemovalService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteRemovalService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Removes every note whose `completed` flag is set.
    ///
    /// Leaves all other records untouched. Calling again immediately reports
    /// zero removed with the no-op message.
    pub fn remove_completed(&mut self) -> RemovalReport {
        let targets: Vec<_> = self
            .store
            .enumerate()
            .into_iter()
            .filter(|record| record.note.completed)
            .map(|record| record.entity)
            .collect();

        if targets.is_empty() {
            return RemovalReport {
                removed: 0,
                message: "No completed sticky notes to remove.".to_string(),
            };
        }

        let removed = self.store.remove_notes(&targets);
        info!("event=notes_removed module=service mode=completed count={removed}");
        RemovalReport {
            removed,
            message: format!("Removed {removed} completed sticky note(s)."),
        }
    }

    /// Removes every note unconditionally.
    ///
    /// Destructive: the caller must obtain explicit user confirmation BEFORE
    /// invoking this; the core has no confirmation concept and trusts its
    /// caller. Recovery is limited to the host's detach-batch undo.
    pub fn remove_all(&mut self) -> RemovalReport {
        let targets: Vec<_> = self
            .store
            .enumerate()
            .into_iter()
            .map(|record| record.entity)
            .collect();

        if targets.is_empty() {
            return RemovalReport {
                removed: 0,
                message: "No sticky notes to remove.".to_string(),
            };
        }

        let removed = self.store.remove_notes(&targets);
        info!("event=notes_removed module=service mode=all count={removed}");
        RemovalReport {
            removed,
            message: format!("Removed all {removed} sticky note(s)."),
        }
    }
}
