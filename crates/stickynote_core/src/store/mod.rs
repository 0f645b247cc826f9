//! Store layer abstractions over the host scene.
//!
//! # Responsibility
//! - Define the live-view data access contract used by services.
//! - Isolate host entity-lifecycle details from service orchestration.
//!
//! # Invariants
//! - The store owns no records; it enumerates whatever the host currently
//!   contains, in host enumeration order.
//! - Store write paths return semantic errors (`EntityNotFound`,
//!   `NoteMissing`) in addition to host transport errors.

pub mod note_store;
