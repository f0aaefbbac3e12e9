//! Application services: the project store and the form that feeds it.

mod form;
mod store;

pub use form::{FormField, ProjectForm, ProjectFormError};
pub use store::{ProjectStore, TransitionOutcome};
