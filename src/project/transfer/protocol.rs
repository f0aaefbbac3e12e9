//! The two roles of a drag-and-drop transition.

use super::DataTransfer;
use crate::project::services::{ProjectStore, TransitionOutcome};

/// Component that exports a project identity when a drag begins.
pub trait DragSource {
    /// Writes the dragged project's identifier onto `transfer`.
    fn on_drag_start(&self, transfer: &mut DataTransfer);
}

/// Whether a drop target accepts the hovering payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropDecision {
    /// The payload is a project identifier; dropping is allowed.
    Accept,
    /// The payload is of another kind; the default reject applies.
    Reject(DropRejection),
}

/// Why a drop did not reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRejection {
    /// Nothing was exported onto the transfer.
    EmptyPayload,
    /// The first content type is not plain text.
    WrongContentType,
    /// The plain-text payload is not a project identifier.
    MalformedId,
}

/// Result of handling a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The payload was rejected before any store call.
    Rejected(DropRejection),
    /// The store was asked to transition the project.
    Applied(TransitionOutcome),
}

impl DropOutcome {
    /// Returns whether the drop changed a project's status.
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Applied(outcome) if outcome.is_moved())
    }
}

/// Component that consumes a dragged project identity.
pub trait DropTarget {
    /// Inspects a hovering payload and shows the droppable affordance if
    /// it is accepted.
    fn on_drag_over(&mut self, transfer: &DataTransfer) -> DropDecision;

    /// Reverts the droppable affordance after the drag moves away.
    fn on_drag_leave(&mut self);

    /// Consumes the payload and asks `store` to move the project here.
    fn on_drop(&mut self, transfer: &DataTransfer, store: &mut ProjectStore) -> DropOutcome;
}
