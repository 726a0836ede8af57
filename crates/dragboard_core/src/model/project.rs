//! Project domain model.
//!
//! # Responsibility
//! - Define the work-item record tracked by the board.
//! - Provide stable string forms for the two board columns.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` only changes through `ProjectStore::move_project`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every project on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Lifecycle stage of a project, one per board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing; shown in the "active" column.
    Active,
    /// Work is done; shown in the "finished" column.
    Finished,
}

impl ProjectStatus {
    /// Stable string form matching the column naming on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a status from its stable string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

/// A single work item tracked by the board.
///
/// Text and people bounds are enforced at the creation boundary (intake),
/// not by this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable unique ID, assigned at creation and never reassigned.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Headcount assigned to the project.
    pub people: u32,
    /// Changes only through the store's transition operation.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID and `Active` status.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by callers that already own an identity for the item. The
    /// provided `id` must remain stable for this project's lifetime.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project sits in the "active" column.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

/// Selects the projects belonging to one column, preserving board order.
///
/// Column views apply this to the snapshot a listener receives.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.status == status)
        .cloned()
        .collect()
}
