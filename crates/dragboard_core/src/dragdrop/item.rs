//! Draggable item state machine.

use crate::dragdrop::payload::Transfer;
use crate::model::project::ProjectId;

/// Phase of one draggable board item.
///
/// `Idle -> Dragging -> (DroppedAccepted | DroppedRejected) -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    DroppedAccepted,
    DroppedRejected,
}

/// Drag-side half of the protocol, one per rendered project item.
///
/// The source only emits the transfer and tracks its own phase; whether a
/// status actually changes is decided by the drop zone and the store.
#[derive(Debug)]
pub struct DragSource {
    project_id: ProjectId,
    phase: DragPhase,
}

impl DragSource {
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            phase: DragPhase::Idle,
        }
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Begins a drag: enters `Dragging` and emits the move transfer
    /// carrying this item's id.
    pub fn drag_start(&mut self) -> Transfer {
        self.phase = DragPhase::Dragging;
        Transfer::project_move(self.project_id)
    }

    /// Records the drop outcome reported by the drop zone.
    ///
    /// Only meaningful while `Dragging`; out-of-sequence calls are ignored.
    pub fn record_drop(&mut self, accepted: bool) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.phase = if accepted {
            DragPhase::DroppedAccepted
        } else {
            DragPhase::DroppedRejected
        };
    }

    /// Ends the drag and returns to `Idle`, regardless of drop outcome.
    ///
    /// There is no rollback to perform: if the drop never reached a valid
    /// column, the item's status is simply unchanged.
    pub fn drag_end(&mut self) {
        self.phase = DragPhase::Idle;
    }
}
