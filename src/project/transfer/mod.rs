//! Drag-and-drop status transition protocol.
//!
//! A [`DragSource`] exports a project identifier onto a [`DataTransfer`] as
//! plain text. A [`DropTarget`] inspects the transfer while it hovers,
//! and on drop turns the identifier into a store transition. Abandoned drags
//! never reach the drop step, so they never touch the store.

mod data_transfer;
mod protocol;

pub use data_transfer::{DataTransfer, PLAIN_TEXT};
pub use protocol::{DragSource, DropDecision, DropOutcome, DropRejection, DropTarget};
