//! Error types for view rendering.

use thiserror::Error;

/// Errors returned while rendering a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A view template failed to render.
    #[error("failed to render {view} template: {reason}")]
    Template {
        /// Name of the view being rendered.
        view: &'static str,
        /// Rendering failure description.
        reason: String,
    },
}

impl ViewError {
    pub(crate) fn template(view: &'static str, error: &minijinja::Error) -> Self {
        Self::Template {
            view,
            reason: error.to_string(),
        }
    }
}
