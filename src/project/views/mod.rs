//! Rendering components for the board.
//!
//! Views are composed rather than inherited: each implements [`View`], and
//! placing a rendered fragment into its parent is left to [`mount`].

mod column;
mod error;
mod form;
mod host;
mod item;

pub use column::ColumnView;
pub use error::ViewError;
pub use host::{Host, InsertPosition, mount};
pub use item::ItemView;

use crate::project::services::ProjectStore;

/// Capability contract shared by all board views.
pub trait View {
    /// Wires the view to the store. Views that only display data keep the
    /// default no-op.
    fn configure(&mut self, _store: &mut ProjectStore) {}

    /// Renders the view's current content as display text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Template`] if the view's template fails to
    /// render.
    fn render(&self) -> Result<String, ViewError>;
}
