//! Core domain logic for the dragboard task board.
//! This crate is the single source of truth for board state and legal
//! status transitions; rendering lives entirely in view collaborators.

pub mod dragdrop;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use dragdrop::column::{BoardColumn, DropZone, HoverState};
pub use dragdrop::item::{DragPhase, DragSource};
pub use dragdrop::payload::{DragEffect, DragPayload, Transfer};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{filter_by_status, Project, ProjectId, ProjectStatus};
pub use model::validation::{first_violation, validate, FieldRules, FieldValue, FieldViolation};
pub use service::intake::{
    check_draft, IntakeError, ProjectDraft, ProjectIntake, DESCRIPTION_MIN_LENGTH, PEOPLE_MAX,
    PEOPLE_MIN,
};
pub use store::handle::{SharedProjectStore, StoreAccessError, StoreResult};
pub use store::project_store::{ProjectStore, SnapshotListener};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
