//! Domain model for board projects and form-field validation.
//!
//! # Responsibility
//! - Define the canonical project record shared by the store and the
//!   drag-and-drop protocol.
//! - Provide the pure field-validation predicate applied at intake.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - The model never mutates `status` on its own; only the store's
//!   transition operation does.

pub mod project;
pub mod validation;
