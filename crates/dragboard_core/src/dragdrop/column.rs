//! Drop-target column state machine.
//!
//! # Responsibility
//! - Gate hover feedback on the transfer payload type.
//! - Resolve a drop into the column's status and request the transition.
//!
//! # Invariants
//! - `drag_leave` always returns the column to neutral, drop pending or
//!   not.
//! - A drop leaves the column neutral whether or not a transition was
//!   requested.

use crate::dragdrop::payload::Transfer;
use crate::model::project::{ProjectId, ProjectStatus};
use crate::store::project_store::ProjectStore;
use log::debug;

/// The two columns a project can be dropped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardColumn {
    Active,
    Finished,
}

impl BoardColumn {
    /// Status a project acquires when dropped into this column.
    pub fn target_status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.target_status().as_str()
    }
}

/// Hover feedback state of a drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Neutral,
    /// A compatible drag is over the column; the view shows drop readiness.
    HoverActive,
}

/// Target-side half of the protocol, one per board column.
#[derive(Debug)]
pub struct DropZone {
    column: BoardColumn,
    hover: HoverState,
}

impl DropZone {
    pub fn new(column: BoardColumn) -> Self {
        Self {
            column,
            hover: HoverState::Neutral,
        }
    }

    pub fn column(&self) -> BoardColumn {
        self.column
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn is_hover_active(&self) -> bool {
        self.hover == HoverState::HoverActive
    }

    /// Handles a drag passing over the column.
    ///
    /// Accepts, and enters `HoverActive`, only for a project-ref payload;
    /// this gate is the single way a drop becomes legal. The return value
    /// is the view collaborator's signal to show drop readiness.
    pub fn drag_over(&mut self, transfer: &Transfer) -> bool {
        match transfer.payload.project_id() {
            Some(_) => {
                self.hover = HoverState::HoverActive;
                true
            }
            None => false,
        }
    }

    /// Handles the pointer leaving the column. Always resets to neutral.
    pub fn drag_leave(&mut self) {
        self.hover = HoverState::Neutral;
    }

    /// Consumes a drop on this column.
    ///
    /// Resolves the column's target status and requests the transition
    /// from the store; returns the id the request was submitted for.
    /// A payload the board cannot interpret changes nothing and yields
    /// `None`. Whether the transition actually commits is the store's
    /// decision (unknown ids and same-status moves are ignored there).
    pub fn drop_transfer(
        &mut self,
        transfer: &Transfer,
        store: &mut ProjectStore,
    ) -> Option<ProjectId> {
        self.hover = HoverState::Neutral;
        let id = transfer.payload.project_id()?;
        debug!(
            "event=drop module=dragdrop column={} id={id}",
            self.column.as_str()
        );
        store.move_project(id, self.column.target_status());
        Some(id)
    }
}
