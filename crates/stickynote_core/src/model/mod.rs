//! Domain model for scene sticky notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by query/response projections.
//! - Keep identity stable while display paths stay derived.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned at creation.
//! - The hierarchy path is never stored on the record; it is re-derived at
//!   query time from the owning entity's position.

pub mod note;
