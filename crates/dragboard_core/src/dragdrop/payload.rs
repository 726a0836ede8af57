//! Typed transfer payload carried by an in-flight drag.
//!
//! The original interaction sniffed an untyped string out of the event;
//! here the payload is an explicit enumerated type, so drop targets match
//! on structure instead of format.

use crate::model::project::ProjectId;

/// Operation semantics advertised by a drag source.
///
/// The board only ever moves items between columns; copy/link semantics do
/// not exist in this protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    Move,
}

/// Content carried by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    /// Identifier of a board project, the only payload columns accept.
    ProjectRef(ProjectId),
    /// Content originating outside the board. Never gates a drop.
    Foreign,
}

impl DragPayload {
    /// Returns the carried project id, if the payload is one the board
    /// can interpret.
    pub fn project_id(self) -> Option<ProjectId> {
        match self {
            Self::ProjectRef(id) => Some(id),
            Self::Foreign => None,
        }
    }
}

/// Pending transfer exchanged between a drag source and drop targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub payload: DragPayload,
    pub effect: DragEffect,
}

impl Transfer {
    /// Transfer emitted when a board item starts dragging.
    pub fn project_move(id: ProjectId) -> Self {
        Self {
            payload: DragPayload::ProjectRef(id),
            effect: DragEffect::Move,
        }
    }

    /// Transfer carrying content the board cannot interpret.
    pub fn foreign() -> Self {
        Self {
            payload: DragPayload::Foreign,
            effect: DragEffect::Move,
        }
    }
}
