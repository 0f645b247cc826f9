//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into agent- and host-facing use-case APIs.
//! - Keep the tool/presentation layers decoupled from host details.

pub mod query;
pub mod removal;
pub mod respond;
